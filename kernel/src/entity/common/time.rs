use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

use time::OffsetDateTime;

/// Creation timestamp tagged with the entity it belongs to, so a rental
/// date cannot be handed where some other entity's timestamp is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }

    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc(), PhantomData)
    }
}

impl<T> AsRef<OffsetDateTime> for CreatedAt<T> {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl<T> From<CreatedAt<T>> for OffsetDateTime {
    fn from(value: CreatedAt<T>) -> Self {
        value.0
    }
}

impl<T> Serialize for CreatedAt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CreatedAt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <OffsetDateTime>::deserialize(deserializer).map(|time| Self(time, PhantomData))
    }
}
