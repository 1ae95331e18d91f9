pub mod outcome;
pub mod service;
pub mod transfer;
