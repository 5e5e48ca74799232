//! Filter and aggregation engines for essay result tables.
//!
//! Everything in this crate is a pure function over the value types in
//! `redacao-model`: filtering never mutates its input, aggregation is
//! recomputed per interaction, and every operation is total — empty
//! selections and empty tables produce empty results, not errors.

pub mod aggregate;
pub mod filter;
pub mod summary;

pub use aggregate::{FrequencyGrid, FrequencyTable, count_by, count_by_pair, observed_values};
pub use filter::filter;
pub use summary::{CategoryCount, Summary, summarize};
