pub use self::{common::*, package::*, region::*, rental::*, ski_pass::*, user::*};

mod common;
mod package;
mod region;
mod rental;
mod ski_pass;
mod user;
