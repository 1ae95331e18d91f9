pub use self::{package::*, rental::*, user::*};

mod package;
mod rental;
mod user;
