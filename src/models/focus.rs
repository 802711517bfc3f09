/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigating and submitting the answer options.
    #[default]
    Choices,
    /// Typing into the player name field.
    Name,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Choices => Focus::Name,
            Focus::Name => Focus::Choices,
        }
    }
}
