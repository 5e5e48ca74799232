//! Plain-text rendering of the analysis outputs.
//!
//! Consumes the pure values produced by `redacao-core` and renders
//! them as terminal tables; no aggregation logic lives here.

pub mod tables;

pub use tables::{
    NOT_APPLICABLE, display_value, render_admin_types, render_frequency, render_grid,
    render_status_codes, render_summary,
};
