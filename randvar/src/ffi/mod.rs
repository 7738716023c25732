//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing random variables to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: parse, draw, query bounds
//! 2. **Simple types**: strings in, floats and lists out
//! 3. **Safe errors**: every Rust error becomes a Python `ValueError`
//! 4. **Single thread**: objects are `unsendable`, like the generators they hold

pub mod random_var;

pub use random_var::PyRandomVar;
