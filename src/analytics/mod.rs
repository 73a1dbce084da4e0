// src/analytics/mod.rs
pub mod coinflip_analytic;
