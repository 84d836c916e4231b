//! Human-readable tree renderings.

pub mod grid;
