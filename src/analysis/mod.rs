//! Derived views over the fetched collections: state grouping, the
//! upcoming-election subset, and voting-record statistics.

pub mod aggregator;
pub mod impact;

pub use aggregator::*;
pub use impact::*;
