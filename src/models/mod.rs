// src/models/mod.rs
pub mod additive;
pub mod model;
pub mod multiplicative;

pub use additive::Additive;
pub use model::{PayoffMode, PayoffModel};
pub use multiplicative::Multiplicative;
