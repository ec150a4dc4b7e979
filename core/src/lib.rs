//! Core business logic for Platelens: image intake, the analysis use case,
//! and the infrastructure adapter for the external vision model.

pub mod application;
pub mod domain;
pub mod infrastructure;
