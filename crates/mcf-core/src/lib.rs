//! mcf-core: stable foundation for the tracking flow graph.
//!
//! Contains:
//! - ids (public location handles and internal node indices)
//! - numeric (Real/Cost + tolerances + cost model helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{McfError, McfResult};
pub use ids::*;
pub use numeric::*;
