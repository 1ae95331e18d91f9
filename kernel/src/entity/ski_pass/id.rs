use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct SkiPassId(i32);

impl SkiPassId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl From<i32> for SkiPassId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<SkiPassId> for i32 {
    fn from(value: SkiPassId) -> Self {
        value.0
    }
}

impl AsRef<i32> for SkiPassId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
