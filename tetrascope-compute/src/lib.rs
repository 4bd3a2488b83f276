pub mod divergence;

pub use divergence::{compute_divergence, diverges_point, DivergenceMap};

// Re-export core types for convenience
pub use tetrascope_core::*;
