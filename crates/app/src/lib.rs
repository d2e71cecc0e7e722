//! Shared e-commerce domain: enumerations, record shapes and the rules they imply.

pub mod domain;
pub mod ids;
