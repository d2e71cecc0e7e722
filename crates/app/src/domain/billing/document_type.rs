//! Document Type

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::labels::UnknownLabel;

/// Tax document issued against a billing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum DocumentType {
    Receipt,
    Invoice,
}

impl DocumentType {
    pub const ALL: [Self; 2] = [Self::Receipt, Self::Invoice];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "boleta",
            Self::Invoice => "factura",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|document_type| document_type.as_str() == value)
            .ok_or_else(|| UnknownLabel::new("document type", value))
    }
}

impl From<DocumentType> for &'static str {
    fn from(value: DocumentType) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for DocumentType {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
