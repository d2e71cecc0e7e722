//! Orders

pub mod errors;
pub mod models;
pub mod status;

pub use errors::OrderError;
pub use models::{Order, OrderId};
pub use status::OrderStatus;
