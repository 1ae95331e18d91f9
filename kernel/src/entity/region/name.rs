use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionName(String);

impl RegionName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<String> for RegionName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<RegionName> for String {
    fn from(value: RegionName) -> Self {
        value.0
    }
}

impl AsRef<str> for RegionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
