//! Comments on reviews.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reviews/{review_id}/comments` | List a review's comments, newest first |
//! | POST | `/api/reviews/{review_id}/comments` | Add a comment to a review |
//! | DELETE | `/api/comments/{comment_id}` | Delete a comment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CommentService;
