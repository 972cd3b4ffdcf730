//! Domain layer: the room tree and its read-only views
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod render;
pub mod room;

pub use render::to_tree_string;
pub use room::{Direction, Room, RoomIter};
