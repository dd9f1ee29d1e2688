use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use crate::{
    form::SubmitRequest,
    submit::{Transport, TransportError, TransportResponse},
};

type SubmitResult = Result<TransportResponse, TransportError>;

/// A request running on a worker thread.
pub(super) struct PendingSubmission {
    receiver: Receiver<SubmitResult>,
}

impl PendingSubmission {
    pub(super) fn spawn(
        transport: Arc<dyn Transport>,
        request: SubmitRequest,
    ) -> Result<Self, TransportError> {
        let (sender, receiver) = mpsc::channel();
        thread::Builder::new()
            .name("formui-submit".to_string())
            .spawn(move || {
                let result = transport.post_json(&request.url, &request.body);
                // The UI may already be gone; nobody is left to tell.
                let _ = sender.send(result);
            })
            .map_err(|err| {
                TransportError::Unavailable(format!("failed to start submission worker: {err}"))
            })?;
        Ok(Self { receiver })
    }

    /// The transport outcome once the worker is done.
    pub(super) fn poll(&self) -> Option<SubmitResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TransportError::Unavailable(
                "submission worker stopped without an answer".to_string(),
            ))),
        }
    }

    #[cfg(test)]
    pub(super) fn wait(&self) -> SubmitResult {
        self.receiver.recv().unwrap_or_else(|_| {
            Err(TransportError::Unavailable(
                "submission worker stopped without an answer".to_string(),
            ))
        })
    }
}
