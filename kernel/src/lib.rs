pub use crate::error::*;

mod database;
mod delta;
mod entity;
mod error;
mod modify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod delta {
        pub use crate::delta::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
