use std::{fmt, path::Path};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

/// Supported formats for form documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .ok_or_else(|| anyhow!("{} has no file extension", path.display()))?;
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            #[cfg(not(feature = "yaml"))]
            "yaml" | "yml" => Err(anyhow!(
                "{} is YAML, but this build lacks the 'yaml' feature",
                path.display()
            )),
            #[cfg(feature = "toml")]
            "toml" => Ok(DocumentFormat::Toml),
            #[cfg(not(feature = "toml"))]
            "toml" => Err(anyhow!(
                "{} is TOML, but this build lacks the 'toml' feature",
                path.display()
            )),
            other => Err(anyhow!("unsupported form document extension `{other}`")),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_extension_is_recognised() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("form.JSON")).unwrap(),
            DocumentFormat::Json
        );
    }

    #[test]
    fn unknown_or_missing_extensions_fail() {
        assert!(DocumentFormat::from_path(Path::new("form.ini")).is_err());
        assert!(DocumentFormat::from_path(Path::new("form")).is_err());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_extensions_are_recognised() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("form.yml")).unwrap(),
            DocumentFormat::Yaml
        );
    }
}
