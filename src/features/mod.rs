pub mod categories;
pub mod comments;
pub mod endpoints;
pub mod reviews;
pub mod users;
