//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the `Console` boundary trait but are themselves
//! concrete structs, not traits.

mod builder;
mod explorer;

pub use builder::{sample_mansion, BuildMode, MansionBuilder};
pub use explorer::{Choice, Exploration, Explorer, Outcome};
