//! Mansion explorer service
//!
//! Walks the room tree from the root, one choice per prompt, until a leaf is
//! reached, the user quits, or the input is closed.

use tracing::{debug, instrument, warn};

use crate::application::messages;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Direction, Room};
use crate::infrastructure::traits::Console;

/// How an exploration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// There was no room to start from.
    Empty,
    /// A room without children was reached.
    Leaf,
    /// The user chose to leave.
    Quit,
    /// The input was closed before the walk ended.
    InputClosed,
}

/// Report of one exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    pub outcome: Outcome,
    /// Display names of the visited rooms, root first.
    pub trail: Vec<String>,
}

impl Exploration {
    /// Room the walk ended in.
    pub fn final_room(&self) -> Option<&str> {
        self.trail.last().map(String::as_str)
    }
}

/// One answer to the choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Empty,
    Quit,
    Move(Direction),
    Invalid,
}

impl Choice {
    /// Only the first character counts, case-insensitively.
    pub fn parse(input: &str) -> Self {
        match input.chars().next().map(|c| c.to_ascii_lowercase()) {
            None => Choice::Empty,
            Some('q') => Choice::Quit,
            Some('l') => Choice::Move(Direction::Left),
            Some('r') => Choice::Move(Direction::Right),
            Some(_) => Choice::Invalid,
        }
    }
}

/// Service walking a mansion through a [`Console`].
#[derive(Debug, Clone)]
pub struct Explorer {
    placeholder: String,
}

impl Explorer {
    /// `placeholder` is shown for rooms without a name.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn explore(
        &self,
        root: Option<&Room>,
        console: &mut dyn Console,
    ) -> ApplicationResult<Exploration> {
        let Some(root) = root else {
            console
                .write(messages::EMPTY_MANSION)
                .with_context("write empty mansion notice")?;
            return Ok(Exploration {
                outcome: Outcome::Empty,
                trail: Vec::new(),
            });
        };

        console
            .write(messages::EXPLORATION_STARTED)
            .with_context("write exploration header")?;

        let mut current = root;
        let mut trail = vec![self.name_of(current).to_string()];

        let outcome = loop {
            console
                .write(&messages::current_room(self.name_of(current)))
                .with_context("write current room")?;

            if current.is_leaf() {
                console
                    .write(messages::LEAF_REACHED)
                    .with_context("write leaf notice")?;
                break Outcome::Leaf;
            }

            console
                .write(&self.options(current))
                .with_context("write options")?;

            let Some(input) = console
                .ask(messages::CHOICE_PROMPT)
                .with_context("read exploration choice")?
            else {
                warn!("input closed while exploring {}", self.name_of(current));
                console.write("\n").with_context("write newline")?;
                break Outcome::InputClosed;
            };

            let choice = Choice::parse(&input);
            debug!("choice {:?} at {}", choice, self.name_of(current));
            let feedback = match choice {
                Choice::Empty => console.write(messages::EMPTY_CHOICE),
                Choice::Quit => {
                    console
                        .write(messages::QUITTING)
                        .with_context("write quit notice")?;
                    break Outcome::Quit;
                }
                Choice::Move(direction) => match current.child(direction) {
                    Some(next) => {
                        current = next;
                        trail.push(self.name_of(current).to_string());
                        Ok(())
                    }
                    None => console.write(match direction {
                        Direction::Left => messages::NO_PATH_LEFT,
                        Direction::Right => messages::NO_PATH_RIGHT,
                    }),
                },
                Choice::Invalid => console.write(messages::INVALID_OPTION),
            };
            feedback.with_context("write choice feedback")?;
        };

        console
            .write(messages::EXPLORATION_FINISHED)
            .with_context("write exploration footer")?;

        debug!("exploration ended: {:?}, trail={:?}", outcome, trail);
        Ok(Exploration { outcome, trail })
    }

    fn name_of<'a>(&'a self, room: &'a Room) -> &'a str {
        room.display_name(&self.placeholder)
    }

    fn options(&self, room: &Room) -> String {
        let mut line = String::from(messages::OPTIONS_HEADER);
        if let Some(left) = room.child(Direction::Left) {
            line.push_str(&messages::left_option(self.name_of(left)));
        }
        if let Some(right) = room.child(Direction::Right) {
            line.push_str(&messages::right_option(self.name_of(right)));
        }
        line.push_str(messages::QUIT_OPTION);
        line
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Choice::Empty)]
    #[case("q", Choice::Quit)]
    #[case("Quit", Choice::Quit)]
    #[case("l", Choice::Move(Direction::Left))]
    #[case("Left", Choice::Move(Direction::Left))]
    #[case("r", Choice::Move(Direction::Right))]
    #[case("RIGHT", Choice::Move(Direction::Right))]
    #[case("x", Choice::Invalid)]
    #[case(" l", Choice::Invalid)]
    fn given_input_when_parsing_choice_then_uses_first_character(
        #[case] input: &str,
        #[case] expected: Choice,
    ) {
        assert_eq!(Choice::parse(input), expected);
    }

    #[test]
    fn given_room_with_only_right_child_when_listing_options_then_omits_left() {
        let explorer = Explorer::new("(sem nome)");
        let room = Room::new("Hall").with_right(Room::unnamed());

        assert_eq!(
            explorer.options(&room),
            "Opções disponíveis: [r] Ir para a direita -> (sem nome) [q] Sair\n"
        );
    }
}
