//! Core library for the property decision engine.
//!
//! The engine runs a guided interview that infers an investor decision profile
//! from free-text answers, then checks candidate portfolio units against that
//! profile and assembles a decision document for the orchestrating service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
