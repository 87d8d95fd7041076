//! Function-calling schemas for LLM tool APIs, inferred from function
//! signatures and their reST, Google, or Numpy docstrings.
//!
//! See [`docschema_core`] for the full API.

pub use docschema_core::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use docschema_core::prelude::*;
}
