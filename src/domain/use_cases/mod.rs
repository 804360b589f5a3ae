pub mod grid;
pub mod load;
pub mod modal;
pub mod normalize;
pub mod portfolio;
pub mod profile;
pub mod stats;
