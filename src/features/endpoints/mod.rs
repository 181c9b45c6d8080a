//! Self-describing catalog of the public API, served at `GET /api`.

pub mod dtos;
pub mod handlers;
pub mod routes;
