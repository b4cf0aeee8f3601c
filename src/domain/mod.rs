pub mod collaborators;
pub mod display;
pub mod fetch;
pub mod presence;
pub mod user;
