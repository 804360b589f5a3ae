pub mod page;
pub mod target;
