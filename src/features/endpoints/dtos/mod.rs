pub mod endpoint_dto;

pub use endpoint_dto::{catalog, EndpointsResponse};
