use crate::cell_status::CellStatus;
use crate::cell_status::CellStatus::*;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub status: CellStatus,
    pub is_mine: bool,
    pub mines_near: u8,
}

impl Cell {
    /// Writes the two character token, with `X` in place of the first
    /// character when the cell is the selected one.
    pub fn write_token(&self, f: &mut impl Write, selected: bool) -> fmt::Result {
        let (lead, tail) = match self.status {
            Hidden => ('[', ']'),
            Flagged => ('?', '?'),
            Opened if self.is_mine => ('#', '#'),
            // mines_near never exceeds 8
            Opened => (' ', char::from(b'0' + self.mines_near)),
        };
        f.write_char(if selected { 'X' } else { lead })?;
        f.write_char(tail)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_token(f, false)
    }
}
