use crate::action::MoveAction::{Flag, Open};
use crate::action::{Command, Move, MoveAction};
use crate::minefield::Minefield;
use crate::parser::{MoveParser, Parsed};
use crate::util::{Cursor, in_bounds};
use crate::win_state::WinState;
use crossterm::style::{Color, Stylize};
use std::io;
use std::io::{Read, Write};
use thiserror::Error;
use tracing::{debug, info, trace};

/// A rejected command. Coordinates are reported 1-based, the way they were
/// typed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("x is too small: {0}")]
    XTooSmall(i64),
    #[error("y is too small: {0}")]
    YTooSmall(i64),
    #[error("x is too large: {0}")]
    XTooLarge(i64),
    #[error("y is too large: {0}")]
    YTooLarge(i64),
    #[error("invalid location")]
    InvalidLocation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// Input ran out while the game was still going.
    InputEnded,
}

#[derive(Debug)]
pub struct Game {
    field: Minefield,
    // only tracked when cursor commands are on
    cursor: Option<Cursor>,
    styled: bool,
}

impl Game {
    pub fn new(field: Minefield) -> Self {
        Self {
            field,
            cursor: None,
            styled: false,
        }
    }

    /// Track a selected cell, starting at the top left corner.
    pub fn with_cursor(mut self, enabled: bool) -> Self {
        self.cursor = enabled.then_some((0, 0));
        self
    }

    /// Colour the win/loss message.
    pub fn with_styled_messages(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    #[cfg(test)]
    pub fn field(&self) -> &Minefield {
        &self.field
    }

    /// Render, check for the end, read, apply, repeat.
    ///
    /// Returns once the game is won or lost, or when the input ends first.
    /// Rejected commands are reported on `err` and the loop goes on.
    pub fn run<R: Read>(
        &mut self,
        parser: &mut MoveParser<R>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<Outcome> {
        loop {
            write!(out, "{}", self.field.view(self.cursor))?;

            let outcome = match self.field.win_state() {
                WinState::Won => Some(Outcome::Won),
                WinState::Lost => Some(Outcome::Lost),
                WinState::InProgress => None,
            };
            if let Some(outcome) = outcome {
                writeln!(out, "{}", self.banner(outcome == Outcome::Won))?;
                out.flush()?;
                info!(?outcome, "game over");
                return Ok(outcome);
            }
            if let Some((x, y)) = self.cursor {
                writeln!(
                    out,
                    "Your current location is ({}, {})",
                    u32::from(x) + 1,
                    u32::from(y) + 1
                )?;
            }
            out.flush()?;

            let command = match parser.next_command()? {
                Parsed::Command(command) => command,
                Parsed::EndOfInput => {
                    info!("input ended before the game did");
                    return Ok(Outcome::InputEnded);
                }
            };
            if let Err(e) = self.apply(command) {
                debug!(%e, ?command, "rejected");
                writeln!(err, "{}: {e}", env!("CARGO_PKG_NAME"))?;
                err.flush()?;
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::Move(mv) => {
                let cursor = self.validate(mv)?;
                self.dispatch(cursor, mv.action);
            }
            // the parser only emits steps and clicks with cursor commands on
            Command::Step(direction, n) => {
                let Some((x, y)) = self.cursor else {
                    debug!(?command, "no cursor, ignored");
                    return Ok(());
                };
                let (dx, dy) = direction.delta();
                let x = i64::from(x).saturating_add(dx.saturating_mul(n));
                let y = i64::from(y).saturating_add(dy.saturating_mul(n));
                let (w, h) = (self.field.width(), self.field.height());
                self.cursor = Some(in_bounds(x, y, w, h).ok_or(MoveError::InvalidLocation)?);
            }
            Command::Click(action) => {
                let Some(cursor) = self.cursor else {
                    debug!(?command, "no cursor, ignored");
                    return Ok(());
                };
                self.dispatch(cursor, action);
            }
        }
        Ok(())
    }

    fn validate(&self, Move { x, y, .. }: Move) -> Result<Cursor, MoveError> {
        let (w, h) = (self.field.width(), self.field.height());
        if x < 0 {
            Err(MoveError::XTooSmall(x + 1))
        } else if y < 0 {
            Err(MoveError::YTooSmall(y + 1))
        } else if x >= i64::from(w) {
            Err(MoveError::XTooLarge(x + 1))
        } else if y >= i64::from(h) {
            Err(MoveError::YTooLarge(y + 1))
        } else {
            Ok((x as u16, y as u16))
        }
    }

    fn dispatch(&mut self, cursor @ (x, y): Cursor, action: MoveAction) {
        match action {
            Open => self.field.open(i64::from(x), i64::from(y)),
            Flag => self.field.toggle_flag(cursor),
        }
        trace!(x, y, ?action, status = ?self.field.get(cursor).map(|c| c.status), "applied");
    }

    fn banner(&self, won: bool) -> String {
        let (text, color) = if won {
            ("You won!", Color::Green)
        } else {
            ("You lost!", Color::Red)
        };
        if self.styled {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
