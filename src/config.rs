use crate::error::{CredpromptError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

/// Embeds the contents of the assets/ directory into the binary.
/// The prompt layout lives there; nothing is read from disk at runtime.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// One prompted field: the label shown to the user and the variable it is exported as.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub export: String,
}

/// What gets asked, in which order, and how the answers are printed.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Layout {
    pub header: String,
    pub access_key_id: FieldSpec,
    pub access_secret_key: FieldSpec,
}

impl Layout {
    /// Parses the layout compiled in from `assets/layout.yml`.
    pub fn load() -> Result<Self> {
        let file = Asset::get("layout.yml")
            .ok_or_else(|| CredpromptError::Custom("Embedded layout.yml not found".to_string()))?;

        Ok(serde_yaml::from_slice(&file.data)?)
    }
}
