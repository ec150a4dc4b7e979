//! HTTP surface for Platelens: the single page, the analysis endpoint, and
//! the operational routes around them.

pub mod application;
pub mod args;
