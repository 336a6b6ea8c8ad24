#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellStatus {
    #[default]
    Hidden,
    Opened,
    Flagged,
}

impl CellStatus {
    /// Hidden and Flagged swap, Opened stays put.
    pub fn toggle_flag(self) -> Self {
        match self {
            Self::Hidden => Self::Flagged,
            Self::Flagged => Self::Hidden,
            Self::Opened => Self::Opened,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CellStatus::*;

    #[test]
    fn flag_toggles_between_hidden_and_flagged() {
        assert_eq!(Hidden.toggle_flag(), Flagged);
        assert_eq!(Flagged.toggle_flag(), Hidden);
        assert_eq!(Hidden.toggle_flag().toggle_flag(), Hidden);
    }

    #[test]
    fn opened_ignores_flag() {
        assert_eq!(Opened.toggle_flag(), Opened);
    }
}
