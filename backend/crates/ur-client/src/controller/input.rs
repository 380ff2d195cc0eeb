/// Editable fields of the add-user form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    Email,
}

/// Key presses the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Confirm key; submits the form
    Enter,
    Escape,
    Char(char),
}

impl Key {
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter)
    }
}
