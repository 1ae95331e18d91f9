use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Firstname(String);

impl Firstname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<String> for Firstname {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Firstname> for String {
    fn from(value: Firstname) -> Self {
        value.0
    }
}

impl AsRef<str> for Firstname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lastname(String);

impl Lastname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<String> for Lastname {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Lastname> for String {
    fn from(value: Lastname) -> Self {
        value.0
    }
}

impl AsRef<str> for Lastname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
