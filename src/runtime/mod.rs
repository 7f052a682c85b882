//! Runtime backends for graph execution
//!
//! This module defines the `Runtime` trait and the CPU reference backend.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a compute unit)
//! └── Client (executes CompiledGraph values)
//! ```

mod helpers;
pub mod traits;

pub mod cpu;

pub use helpers::validate_inputs;
pub use traits::{Device, Runtime, RuntimeClient};
