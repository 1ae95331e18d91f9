pub use self::{package::*, region::*, rental::*, user::*};

mod package;
mod region;
mod rental;
mod user;
