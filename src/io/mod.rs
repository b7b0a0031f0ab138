//! I/O operations module
//!
//! Wraps the external block-copy tool behind the `BlockCopy` trait.

pub mod dd;

pub use dd::{BlockCopy, CopyOutput, DdCommand};
