//! Layout module orchestrator following the RSB module specification.
//!
//! Downstream crates import placement types from here while the engine
//! implementation lives in the private `core` module. Frontier helpers stay
//! public in `outline` because callers hold and pass outlines themselves.

mod core;
pub mod outline;

pub use core::{
    Align, GridLayout, InsertResult, LayoutGroup, LayoutOptions, OutlineSnapshot, derive_columns,
};
pub use outline::Outline;
