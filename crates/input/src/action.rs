use pathforge_common::Direction;

/// A viewer action produced from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the viewport one cell.
    Shift(Direction),
    /// Throw away the current level and build a new one.
    Regenerate,
    /// Key with no binding.
    Noop,
}

impl Action {
    /// Default bindings: `w`/`a`/`s`/`d` move the viewport, `r` regenerates.
    /// Case-insensitive.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'w' => Action::Shift(Direction::Up),
            'a' => Action::Shift(Direction::Left),
            's' => Action::Shift(Direction::Down),
            'd' => Action::Shift(Direction::Right),
            'r' => Action::Regenerate,
            _ => Action::Noop,
        }
    }

    /// Map every character of `keys`, dropping unbound ones.
    pub fn parse_sequence(keys: &str) -> Vec<Action> {
        keys.chars()
            .map(Action::from_key)
            .filter(|a| *a != Action::Noop)
            .collect()
    }
}
