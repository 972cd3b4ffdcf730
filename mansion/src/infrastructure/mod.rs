//! Infrastructure layer: I/O boundary implementations
//!
//! This layer implements the console the application services talk through.

pub mod traits;

pub use traits::{Console, TextConsole};
