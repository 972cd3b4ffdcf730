//! Interactive mansion explorer.
//!
//! A mansion is a binary tree of rooms. It is built either from a fixed sample
//! layout or room by room from the user's answers, then walked from the
//! entrance by choosing left or right until a room without exits is reached.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
