//! Rendering of roster and voting-record views.

pub mod generator;

pub use generator::*;
