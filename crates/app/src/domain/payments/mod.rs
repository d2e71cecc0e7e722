//! Payments

pub mod models;
pub mod status;

pub use models::{Payment, PaymentId};
pub use status::PaymentStatus;
