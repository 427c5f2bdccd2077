use thiserror::Error;

use super::token::{Range, pos, range};

pub type Result<T> = std::result::Result<T, EvalError>;

/// Why an expression could not be evaluated.
///
/// Positions are byte offsets into the evaluated input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid character {ch:?}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("invalid number literal")]
    InvalidNumber { start: usize, end: usize },
    #[error("missing an operand")]
    MissingOperand { pos: usize },
    #[error("unexpected operator")]
    UnexpectedOperator { pos: usize },
    #[error("repeated sign")]
    RepeatedSign { pos: usize },
    #[error("division by zero")]
    DivisionByZero { pos: usize },
    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// The input range this error points at, if any.
    pub const fn range(&self) -> Option<Range> {
        match *self {
            Self::InvalidCharacter { ch, pos: p } => Some(range(p, p + ch.len_utf8())),
            Self::InvalidNumber { start, end } => Some(range(start, end)),
            Self::MissingOperand { pos: p }
            | Self::UnexpectedOperator { pos: p }
            | Self::RepeatedSign { pos: p }
            | Self::DivisionByZero { pos: p } => Some(pos(p)),
            Self::NonFinite => None,
        }
    }

    /// Render the input with a caret line under the offending range,
    /// followed by the error message.
    pub fn show(&self, input: &str) -> String {
        let mut out = String::from(input);
        out.push('\n');
        if let Some(r) = self.range() {
            let start = char_column(input, r.start);
            let end = char_column(input, r.end).max(start + 1);
            out.extend((0..start).map(|_| ' '));
            out.extend((start..end).map(|_| '^'));
            out.push('\n');
        }
        out.push_str(&self.to_string());
        out
    }
}

/// Convert a byte offset into a character column, clamping past the end.
fn char_column(input: &str, byte: usize) -> usize {
    if byte >= input.len() {
        return input.chars().count() + byte.saturating_sub(input.len());
    }
    input
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_marks_operator() {
        let err = EvalError::UnexpectedOperator { pos: 2 };
        assert_eq!(err.show("5+*3"), "5+*3\n  ^\nunexpected operator");
    }

    #[test]
    fn test_show_marks_number_range() {
        let err = EvalError::InvalidNumber { start: 2, end: 7 };
        assert_eq!(err.show("1+1.2.3"), "1+1.2.3\n  ^^^^^\ninvalid number literal");
    }

    #[test]
    fn test_show_marks_past_end_for_missing_operand() {
        let err = EvalError::MissingOperand { pos: 2 };
        assert_eq!(err.show("5*"), "5*\n  ^\nmissing an operand");
    }

    #[test]
    fn test_show_counts_characters_not_bytes() {
        let err = EvalError::InvalidCharacter { ch: 'x', pos: 3 };
        assert_eq!(err.show("é+x"), "é+x\n  ^\ninvalid character 'x'");
    }

    #[test]
    fn test_show_without_range() {
        assert_eq!(
            EvalError::NonFinite.show("1"),
            "1\nresult is not a finite number"
        );
    }
}
