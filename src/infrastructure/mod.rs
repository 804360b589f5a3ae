pub mod html;
pub mod utils;
