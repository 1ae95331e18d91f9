pub use self::{package::*, rental::*, ski_pass::*, user::*};

mod package;
mod rental;
mod ski_pass;
mod user;
