#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WinState {
    #[default]
    InProgress,
    Lost,
    Won,
}
