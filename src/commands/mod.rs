//! Browser Command Wrappers
//!
//! Frontend bindings to browser APIs, organized by capability.

mod clipboard;
mod storage;

// Re-export all public items
pub use clipboard::*;
pub use storage::*;
