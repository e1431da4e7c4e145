pub mod admin;
pub mod moderator;
