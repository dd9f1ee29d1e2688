use crate::presentation::PopupRender;

/// Option list opened over a dropdown field.
pub(crate) struct DropdownPopup {
    pub(crate) field_id: String,
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl DropdownPopup {
    pub(crate) fn new(
        field_id: impl Into<String>,
        title: impl Into<String>,
        options: Vec<String>,
        selected: usize,
    ) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let selected = selected.min(options.len() - 1);
        Some(Self {
            field_id: field_id.into(),
            title: title.into(),
            options,
            selected,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut popup =
            DropdownPopup::new("reason", "Reason", vec!["".into(), "Jobs".into()], 5).unwrap();
        assert_eq!(popup.selected(), 1);
        popup.select_next();
        assert_eq!(popup.selected(), 0);
        popup.select_previous();
        assert_eq!(popup.selected(), 1);
    }

    #[test]
    fn empty_option_lists_do_not_open() {
        assert!(DropdownPopup::new("reason", "Reason", Vec::new(), 0).is_none());
    }
}
