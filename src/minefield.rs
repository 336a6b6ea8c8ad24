use crate::cell::Cell;
use crate::cell_status::CellStatus::*;
use crate::util::{Cursor, DIRS_8, in_bounds, valid_neighbors, xy_i};
use crate::win_state::WinState;
use crate::win_state::WinState::{InProgress, Lost, Won};
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Minefield {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    // reused by every flood fill so it's only allocated once
    point_stack: VecDeque<Cursor>,
}

impl Minefield {
    /// An empty field: every cell hidden, no mines yet.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            point_stack: VecDeque::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Cell> {
        xy_i(cursor, self.width, self.height).map(|i| &self.cells[i])
    }

    /// Places `mines` distinct mines by rejection sampling: draw a random
    /// cell, retry if it already holds a mine.
    ///
    /// The caller guarantees `mines <= width * height`; anything above is
    /// capped so the loop always terminates.
    pub fn generate<R: Rng>(&mut self, mines: u32, rng: &mut R) {
        debug_assert!(mines as usize <= self.cells.len());
        let mines = (mines as usize).min(self.cells.len());

        let mut placed = 0;
        while placed < mines {
            let cursor = (
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            if self.place_mine(cursor) {
                placed += 1;
            }
        }
    }

    /// Returns false when the cell already holds a mine.
    fn place_mine(&mut self, cursor: Cursor) -> bool {
        let (w, h) = (self.width, self.height);
        let Some(i) = xy_i(cursor, w, h) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;

        for neighbor in valid_neighbors(&DIRS_8, cursor, w, h) {
            if let Some(j) = xy_i(neighbor, w, h) {
                self.cells[j].mines_near += 1;
            }
        }
        true
    }

    /// Flood-fill reveal starting at `(x, y)`.
    ///
    /// Out of bounds is a no-op. Cells with no neighbouring mines spread to
    /// all eight neighbours; already opened cells stop the spread. Flagged
    /// cells and mines are opened like any other cell.
    pub fn open(&mut self, x: i64, y: i64) {
        let (w, h) = (self.width, self.height);
        let Some(start) = in_bounds(x, y, w, h) else {
            return;
        };

        let mut opened = 0usize;
        self.point_stack.push_back(start);
        while let Some(cursor) = self.point_stack.pop_front() {
            let Some(i) = xy_i(cursor, w, h) else {
                continue;
            };
            let cell = &mut self.cells[i];
            if cell.status == Opened {
                continue;
            }
            cell.status = Opened;
            opened += 1;

            if cell.mines_near == 0 {
                self.point_stack.extend(valid_neighbors(&DIRS_8, cursor, w, h));
            }
        }
        trace!(x, y, opened, "flood fill");
    }

    /// Hidden and Flagged swap; opened cells and out of bounds are left alone.
    pub fn toggle_flag(&mut self, cursor: Cursor) {
        if let Some(i) = xy_i(cursor, self.width, self.height) {
            let cell = &mut self.cells[i];
            cell.status = cell.status.toggle_flag();
        }
    }

    /// Lost wins over everything else: one opened mine is enough.
    pub fn win_state(&self) -> WinState {
        let mut closed = 0usize;
        let mut mines = 0usize;
        for cell in &self.cells {
            if cell.is_mine && cell.status == Opened {
                return Lost;
            }
            closed += usize::from(cell.status != Opened);
            mines += usize::from(cell.is_mine);
        }

        if closed == mines { Won } else { InProgress }
    }

    pub fn view(&self, selected: Option<Cursor>) -> FieldView<'_> {
        FieldView {
            field: self,
            selected: selected.and_then(|c| xy_i(c, self.width, self.height)),
        }
    }
}

/// Text rendering of a field, optionally marking one selected cell.
pub struct FieldView<'a> {
    field: &'a Minefield,
    selected: Option<usize>,
}

impl Display for FieldView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = self.field.width as usize;
        for (row, line) in self.field.cells.chunks(w.max(1)).enumerate() {
            for (col, cell) in line.iter().enumerate() {
                cell.write_token(f, self.selected == Some(row * w + col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Minefield {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view(None))
    }
}
