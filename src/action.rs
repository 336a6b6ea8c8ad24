#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveAction {
    Open,
    Flag,
}

/// A decoded `#x;y` style move. Coordinates are 0-based and unchecked, so
/// they can be negative or past the edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub x: i64,
    pub y: i64,
    pub action: MoveAction,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    /// Move the selection by a number of cells.
    Step(Direction, i64),
    /// Open or flag the selected cell.
    Click(MoveAction),
}
