//! Comercio Domain Concerns

pub mod billing;
pub mod carts;
pub mod labels;
pub mod orders;
pub mod payments;
pub mod products;
pub mod users;
