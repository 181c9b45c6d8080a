mod review;

pub use review::ReviewWithCount;
