#![no_std] // The vocabulary types are shared with embedded/WASM consumers

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod phonology;
pub mod morphology;
pub mod model;

// Re-export core types for convenience
pub use phonology::*;
pub use morphology::*;
pub use model::*;
