use crate::system::sort::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SortBy(SortKey),
    Navigate(Direction),
    KillSelected,
    None,
}
