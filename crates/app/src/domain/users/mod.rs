//! Users

pub mod models;

pub use models::{Password, User, UserId};
