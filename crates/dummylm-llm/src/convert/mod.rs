//! Conversion from vendor wire formats into the generic response shape

pub mod anthropic;
