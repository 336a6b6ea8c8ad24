use crate::action::Direction::*;
use crate::action::MoveAction::{Flag, Open};
use crate::action::{Command, Direction, Move, MoveAction};
use std::io;
use std::io::{Bytes, Read};
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Command(Command),
    /// The stream ran out before a full command was read. Nothing more will
    /// ever arrive.
    EndOfInput,
}

#[derive(Copy, Clone, Debug)]
enum Marker {
    Move(MoveAction),
    Step(Direction),
    Click(MoveAction),
}

/// Decodes commands from a byte stream, one at a time.
///
/// ```text
/// move       := ('#' | '?') number 'x' number ';'
/// step       := ('k' | 'j' | 'h' | 'l') number ';'     cursor commands only
/// click      := '@' | '!'                              cursor commands only
/// number     := any bytes; the digits among them are accumulated
/// ```
///
/// Bytes before a marker are skipped. Move coordinates are typed 1-based
/// and come out 0-based, so a typed `0` decodes as `-1`.
pub struct MoveParser<R> {
    bytes: Bytes<R>,
    cursor_commands: bool,
}

impl<R: Read> MoveParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            cursor_commands: false,
        }
    }

    pub fn with_cursor_commands(mut self, enabled: bool) -> Self {
        self.cursor_commands = enabled;
        self
    }

    /// Blocks until a full command or the end of the stream.
    pub fn next_command(&mut self) -> io::Result<Parsed> {
        let Some(command) = self.read_command()? else {
            debug!("end of input");
            return Ok(Parsed::EndOfInput);
        };
        debug!(?command, "decoded");
        Ok(Parsed::Command(command))
    }

    fn read_command(&mut self) -> io::Result<Option<Command>> {
        let marker = loop {
            let Some(byte) = self.next_byte()? else {
                return Ok(None);
            };
            if let Some(marker) = self.marker(byte) {
                break marker;
            }
        };

        let command = match marker {
            Marker::Move(action) => {
                let Some(x) = self.number_until(b'x')? else {
                    return Ok(None);
                };
                let Some(y) = self.number_until(b';')? else {
                    return Ok(None);
                };
                Command::Move(Move {
                    x: x - 1,
                    y: y - 1,
                    action,
                })
            }
            Marker::Step(direction) => {
                let Some(n) = self.number_until(b';')? else {
                    return Ok(None);
                };
                Command::Step(direction, n)
            }
            Marker::Click(action) => Command::Click(action),
        };
        Ok(Some(command))
    }

    fn marker(&self, byte: u8) -> Option<Marker> {
        match byte {
            b'#' => Some(Marker::Move(Open)),
            b'?' => Some(Marker::Move(Flag)),
            _ if !self.cursor_commands => None,
            b'@' => Some(Marker::Click(Open)),
            b'!' => Some(Marker::Click(Flag)),
            b'k' => Some(Marker::Step(Up)),
            b'j' => Some(Marker::Step(Down)),
            b'h' => Some(Marker::Step(Left)),
            b'l' => Some(Marker::Step(Right)),
            _ => None,
        }
    }

    /// Accumulates digits up to `terminator`, ignoring everything else.
    /// Saturates rather than wrapping on absurdly long numbers.
    fn number_until(&mut self, terminator: u8) -> io::Result<Option<i64>> {
        let mut n: i64 = 0;
        loop {
            match self.next_byte()? {
                None => return Ok(None),
                Some(byte) if byte == terminator => return Ok(Some(n)),
                Some(digit @ b'0'..=b'9') => {
                    n = n.saturating_mul(10).saturating_add(i64::from(digit - b'0'));
                }
                Some(_) => {}
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}
