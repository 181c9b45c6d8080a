//! Board game reviews.
//!
//! Listing supports an optional category filter and sorting on a fixed set
//! of columns; every review carries a `comment_count` computed at read time.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reviews` | List reviews (`category`, `sort_by`, `order_by`) |
//! | GET | `/api/reviews/{review_id}` | Get a review |
//! | PATCH | `/api/reviews/{review_id}` | Adjust a review's votes |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
