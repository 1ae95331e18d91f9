use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct RegionId(i32);

impl RegionId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl From<i32> for RegionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<RegionId> for i32 {
    fn from(value: RegionId) -> Self {
        value.0
    }
}

impl AsRef<i32> for RegionId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
