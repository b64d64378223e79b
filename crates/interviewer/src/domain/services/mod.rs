//! Domain Services
//!
//! Pure functions over domain types.

mod prompt_builder;

pub use prompt_builder::*;
