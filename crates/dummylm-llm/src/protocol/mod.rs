//! Vendor wire format types
//!
//! Pure serde structs matching a provider's JSON shape. They exist only at
//! the boundary and are converted into the generic types before use.

pub mod anthropic;
