pub mod review_dto;
pub mod review_query;

pub use review_dto::{
    PatchReviewVotesDto, ReviewListResponse, ReviewResponse, ReviewResponseDto,
    UpdatedReviewResponse,
};
pub use review_query::{ReviewListFilter, ReviewQueryParams};
