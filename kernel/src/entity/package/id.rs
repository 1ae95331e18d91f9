use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct PackageId(i32);

impl PackageId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl From<i32> for PackageId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<PackageId> for i32 {
    fn from(value: PackageId) -> Self {
        value.0
    }
}

impl AsRef<i32> for PackageId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
