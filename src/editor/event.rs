use crate::eval::Operator;

/// A discrete calculator input, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// An ASCII digit `0`-`9`
    Digit(char),
    Operator(Operator),
    DecimalPoint,
    Clear,
    /// Delete the last character
    Delete,
    Evaluate,
}

impl InputEvent {
    /// Map a typed character to the input it stands for.
    ///
    /// Control actions other than `=` have no character form.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Evaluate),
            _ => match Operator::from_char(c) {
                Some(op) => Some(Self::Operator(op)),
                None => None,
            },
        }
    }
}
