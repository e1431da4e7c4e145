pub mod products;
pub mod reports;
pub mod reviews;
pub mod users;
