//! Map rendering of a mansion as a text tree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::room::{Direction, Room};

/// Label rendered in place of a mansion without any room.
pub const EMPTY_MAP_LABEL: &str = "(mansão vazia)";

/// Render the mansion as a `termtree` tree.
///
/// Children are prefixed with the key that leads to them (`[l]`/`[r]`), so the
/// map doubles as a cheat sheet for the explorer.
///
/// Both this conversion and `termtree`'s own `Display` recurse once per level,
/// like the manual builder that produced the tree. Use `max_depth` to bound
/// them for very deep mansions.
#[instrument(level = "debug", skip_all)]
pub fn to_tree_string(root: Option<&Room>, placeholder: &str) -> Tree<String> {
    match root {
        Some(room) => build_tree(room, room.display_name(placeholder).to_string(), placeholder),
        None => Tree::new(EMPTY_MAP_LABEL.to_string()),
    }
}

fn build_tree(room: &Room, label: String, placeholder: &str) -> Tree<String> {
    let leaves: Vec<_> = [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|direction| {
            room.child(direction).map(|child| {
                let label = format!("[{}] {}", direction.key(), child.display_name(placeholder));
                build_tree(child, label, placeholder)
            })
        })
        .collect();
    Tree::new(label).with_leaves(leaves)
}
