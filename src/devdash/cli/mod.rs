pub mod args;
pub mod print;
pub mod session;
