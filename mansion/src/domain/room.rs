use tracing::instrument;

/// One of the two ways out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Command key the explorer accepts for this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }
}

/// A room of the mansion: a node in a strict binary tree.
///
/// Each room exclusively owns its children. Names are opaque text: they may be
/// absent, empty or repeated anywhere in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Room {
    pub name: Option<String>,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
}

impl Room {
    /// Create a room without children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            left: None,
            right: None,
        }
    }

    /// Create a room that carries no name at all.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// A room without any child ends the walk.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Name to show the user; `placeholder` stands in for a missing or empty name.
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => placeholder,
        }
    }

    /// Pre-order traversal (room, left subtree, right subtree).
    pub fn iter(&self) -> RoomIter<'_> {
        RoomIter { stack: vec![self] }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn room_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of rooms on the longest path from here down to a leaf.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((room, level)) = stack.pop() {
            deepest = deepest.max(level);
            for child in [room.left.as_deref(), room.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, level + 1));
            }
        }
        deepest
    }

    /// Names of all leaf rooms, left to right. Unnamed leaves yield an empty string.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|room| room.is_leaf())
            .map(|room| room.name.clone().unwrap_or_default())
            .collect()
    }
}

// Release the subtree through a work list so deep trees cannot blow the stack.
impl Drop for Room {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Room>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut room) = pending.pop() {
            pending.extend(room.left.take());
            pending.extend(room.right.take());
        }
    }
}

pub struct RoomIter<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for RoomIter<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Right first so the left subtree is visited first.
        if let Some(right) = current.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = current.left.as_deref() {
            self.stack.push(left);
        }
        Some(current)
    }
}
