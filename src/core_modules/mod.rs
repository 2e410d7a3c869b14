pub mod error;
pub mod point;
pub mod reduction;
pub mod signal;
pub mod statistics;
pub mod utils;
