mod id;
mod price;

pub use self::{id::*, price::*};
