pub mod dates;
pub mod links;
pub mod markdown;
