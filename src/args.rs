use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

const DEFAULT_SIDE: u16 = 10;

/// Minesweeper played over stdin and stdout
#[derive(Parser, Clone, Default, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Moves are read from stdin: #<x>x<y>; opens a cell, ?<x>x<y>; flags it (1-based)."
)]
pub struct MinesweeperArgs {
    /// size of the field, default is 10 by 10
    #[arg(
        num_args = 2,
        action = ArgAction::Set,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub size: Vec<u16>,
    /// amount of mines to place, default is width*height/10
    #[arg(short, long)]
    pub mines: Option<u32>,
    /// user-defined seed for mine generation
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// show the used seed
    #[arg(short = 'S', long)]
    pub show_seed: bool,
    /// enable cursor commands: h j k l to move, @ to open, ! to flag
    #[arg(short, long)]
    pub cursor: bool,
}

/// Validated startup parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub width: u16,
    pub height: u16,
    pub mines: u32,
    pub seed: u64,
    pub show_seed: bool,
    pub cursor: bool,
}

impl MinesweeperArgs {
    /// Fills in defaults and checks the mine count, exiting with a usage
    /// error when it doesn't fit.
    pub fn settings(self) -> Settings {
        self.try_settings().unwrap_or_else(|e| e.exit())
    }

    pub fn try_settings(self) -> Result<Settings, clap::Error> {
        let (width, height) = match self.size[..] {
            [] => (DEFAULT_SIDE, DEFAULT_SIDE),
            [width, height] => (width, height),
            _ => {
                return Err(Self::command().error(
                    ErrorKind::WrongNumberOfValues,
                    "you should pass exactly 2 positional arguments",
                ));
            }
        };
        let size = u32::from(width) * u32::from(height);

        let mines = match self.mines {
            None => size / 10,
            Some(mines) if mines > size => {
                return Err(Self::command().error(
                    ErrorKind::ValueValidation,
                    format!("mines is too large: {mines} (the field has {size} cells)"),
                ));
            }
            Some(mines) => mines,
        };

        Ok(Settings {
            width,
            height,
            mines,
            seed: self.seed.unwrap_or_else(rand::random),
            show_seed: self.show_seed,
            cursor: self.cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Settings, clap::Error> {
        let argv = std::iter::once("text-minesweeper").chain(args.iter().copied());
        MinesweeperArgs::try_parse_from(argv)?.try_settings()
    }

    #[test]
    fn verify_cli() {
        MinesweeperArgs::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let s = parse(&[]).unwrap();
        assert_eq!((s.width, s.height, s.mines), (10, 10, 10));
        assert!(!s.show_seed);
        assert!(!s.cursor);
    }

    #[test]
    fn size_and_default_mines() {
        let s = parse(&["7", "5"]).unwrap();
        assert_eq!((s.width, s.height, s.mines), (7, 5, 3));
        let s = parse(&["3", "3"]).unwrap();
        assert_eq!(s.mines, 0);
    }

    #[test]
    fn explicit_values() {
        let s = parse(&["-m", "4", "-s", "42", "-S", "-c", "2", "2"]).unwrap();
        assert_eq!(
            s,
            Settings {
                width: 2,
                height: 2,
                mines: 4,
                seed: 42,
                show_seed: true,
                cursor: true,
            }
        );
    }

    #[test]
    fn size_needs_both_values() {
        assert!(parse(&["5"]).is_err());
        assert!(parse(&["5", "5", "5"]).is_err());
        assert!(parse(&["5", "5", "5", "5"]).is_err());
    }

    #[test]
    fn bad_values() {
        assert!(parse(&["0", "5"]).is_err());
        assert!(parse(&["5", "70000"]).is_err());
        assert!(parse(&["-m", "-1"]).is_err());
        assert!(parse(&["-s", "seed"]).is_err());
    }

    #[test]
    fn too_many_mines() {
        assert_eq!(parse(&["-m", "4", "2", "2"]).unwrap().mines, 4);
        let e = parse(&["-m", "5", "2", "2"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ValueValidation);
    }
}
