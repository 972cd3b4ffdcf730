//! Mansion builder service
//!
//! Produces the room tree, either the fixed sample layout or one built room by
//! room from the user's answers.

use std::num::NonZeroUsize;

use tracing::{debug, info, instrument};

use crate::application::messages::{self, is_yes};
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Room;
use crate::infrastructure::traits::Console;

/// How the mansion gets built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// The fixed seven-room layout.
    Sample,
    /// Ask the user for every room.
    Manual,
}

/// The fixed sample layout.
///
/// ```text
/// Entrada
/// ├── Sala de Estar
/// │   ├── Biblioteca
/// │   └── Jardim
/// └── Cozinha
///     ├── Sotao
///     └── Quarto Principal
/// ```
pub fn sample_mansion() -> Room {
    let living_room = Room::new("Sala de Estar")
        .with_left(Room::new("Biblioteca"))
        .with_right(Room::new("Jardim"));
    let kitchen = Room::new("Cozinha")
        .with_left(Room::new("Sotao"))
        .with_right(Room::new("Quarto Principal"));

    Room::new("Entrada")
        .with_left(living_room)
        .with_right(kitchen)
}

/// Service building the mansion through a [`Console`].
#[derive(Debug, Clone, Default)]
pub struct MansionBuilder {
    max_depth: Option<NonZeroUsize>,
}

impl MansionBuilder {
    /// Builder without a depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit manual builds to `max_depth` levels; `None` leaves them unbounded.
    pub fn with_max_depth(max_depth: Option<NonZeroUsize>) -> Self {
        Self { max_depth }
    }

    /// Run the startup dialogue and build the mansion.
    ///
    /// With `mode` given, the build-mode question is skipped. Otherwise an
    /// answer starting with `s`/`S` selects the manual build and anything
    /// else (including closed input) selects the sample.
    #[instrument(level = "debug", skip(self, console))]
    pub fn build(
        &self,
        mode: Option<BuildMode>,
        console: &mut dyn Console,
    ) -> ApplicationResult<Option<Room>> {
        console.write(messages::TITLE).with_context("write title")?;

        let mode = match mode {
            Some(mode) => mode,
            None => self.ask_mode(console)?,
        };
        info!("build mode: {:?}", mode);

        let root = match mode {
            BuildMode::Manual => {
                console
                    .write(messages::MANUAL_INTRO)
                    .with_context("write manual build intro")?;
                self.build_manual(console)?
            }
            BuildMode::Sample => {
                let root = sample_mansion();
                console
                    .write(messages::SAMPLE_CREATED)
                    .with_context("write sample notice")?;
                Some(root)
            }
        };

        if let Some(room) = &root {
            debug!(
                "mansion built: rooms={}, depth={}, leaves={:?}",
                room.room_count(),
                room.depth(),
                room.leaf_names()
            );
        } else {
            debug!("mansion built: empty");
        }
        Ok(root)
    }

    fn ask_mode(&self, console: &mut dyn Console) -> ApplicationResult<BuildMode> {
        let answer = console
            .ask(messages::MODE_PROMPT)
            .with_context("read build mode")?;
        Ok(if is_yes(answer.as_deref()) {
            BuildMode::Manual
        } else {
            BuildMode::Sample
        })
    }

    /// Build a tree room by room, depth-first in pre-order.
    ///
    /// An empty name (or closed input) leaves the position without a room,
    /// so answering the very first prompt with ENTER yields an empty mansion.
    #[instrument(level = "debug", skip_all)]
    pub fn build_manual(&self, console: &mut dyn Console) -> ApplicationResult<Option<Room>> {
        self.build_subtree(console, 0)
    }

    fn build_subtree(
        &self,
        console: &mut dyn Console,
        depth: usize,
    ) -> ApplicationResult<Option<Room>> {
        let name = match console
            .ask(messages::NAME_PROMPT)
            .with_context("read room name")?
        {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!(depth, "no room at this position");
                return Ok(None);
            }
        };
        debug!(depth, name = %name, "room created");
        let mut room = Room::new(name.as_str());

        if let Some(limit) = self.max_depth {
            if depth + 1 >= limit.get() {
                console
                    .write(&messages::depth_limit_reached(&name, limit.get()))
                    .with_context("write depth limit notice")?;
                return Ok(Some(room));
            }
        }

        let answer = console
            .ask(&messages::left_child_prompt(&name))
            .with_context("read left child answer")?;
        if is_yes(answer.as_deref()) {
            room.left = self.build_subtree(console, depth + 1)?.map(Box::new);
        }

        let answer = console
            .ask(&messages::right_child_prompt(&name))
            .with_context("read right child answer")?;
        if is_yes(answer.as_deref()) {
            room.right = self.build_subtree(console, depth + 1)?.map(Box::new);
        }

        Ok(Some(room))
    }
}
