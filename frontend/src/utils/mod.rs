pub mod cookie;
pub mod dom;
pub mod timer;
