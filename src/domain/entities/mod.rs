pub mod experience;
pub mod rating;
pub mod skill;
pub mod user;
pub mod view;
