use serde::{Deserialize, Serialize};

/// Fixed-format national identity number. Format validation belongs to
/// the input layer; the core stores it opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(String);

impl NationalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<String> for NationalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NationalId> for String {
    fn from(value: NationalId) -> Self {
        value.0
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
