pub mod endpoint_handler;

pub use endpoint_handler::{__path_get_endpoints, get_endpoints};
