use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl AsRef<i32> for UserId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}
