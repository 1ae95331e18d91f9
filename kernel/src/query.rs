pub use self::{package::*, region::*, ski_pass::*, user::*};

mod package;
mod region;
mod ski_pass;
mod user;
