//! Numeric helpers shared by the distribution layer.

pub mod span;
