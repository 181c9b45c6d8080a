pub mod review_handler;

pub use review_handler::{
    __path_get_review, __path_list_reviews, __path_patch_review_votes, get_review, list_reviews,
    patch_review_votes,
};
