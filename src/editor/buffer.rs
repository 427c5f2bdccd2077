use tracing::debug;

use crate::eval::{self, EvalError, Operator, format_value, is_operator_char};

use super::InputEvent;

/// Text shown in place of the buffer after a failed evaluation.
pub const ERROR_MARKER: &str = "Error";

/// Where the editor is in its input cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing typed yet, or just cleared.
    #[default]
    Empty,
    /// An expression is being typed.
    Typing,
    /// The buffer holds the result of the last evaluation.
    Result,
    /// The buffer holds [`ERROR_MARKER`].
    Error,
}

/// Outcome of [`ExpressionEditor::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Nothing to evaluate; the buffer is left empty.
    Empty,
    Value(f64),
    /// The buffer now shows [`ERROR_MARKER`].
    Failed(EvalError),
}

/// An arithmetic expression being typed on a calculator.
///
/// Outside the error state the buffer only holds digits, `+ - * /` and
/// decimal points, with at most one point per numeric run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionEditor {
    text: String,
    state: EditorState,
}

impl ExpressionEditor {
    /// Create an editor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current buffer contents, as they should be displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply one input event.
    ///
    /// Returns the evaluation outcome for [`InputEvent::Evaluate`] and
    /// `None` for editing events.
    pub fn apply(&mut self, event: InputEvent) -> Option<Evaluation> {
        match event {
            InputEvent::Digit(c) => {
                self.append_digit(c);
            }
            InputEvent::Operator(op) => self.append_operator(op),
            InputEvent::DecimalPoint => self.append_decimal_point(),
            InputEvent::Clear => self.clear(),
            InputEvent::Delete => self.delete_last(),
            InputEvent::Evaluate => return Some(self.evaluate()),
        }
        None
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.state = EditorState::Empty;
    }

    /// Remove the last character. An error marker is removed as a whole.
    pub fn delete_last(&mut self) {
        if self.state == EditorState::Error {
            self.clear();
            return;
        }
        self.text.pop();
        self.state = if self.text.is_empty() {
            EditorState::Empty
        } else {
            EditorState::Typing
        };
    }

    /// Append a digit or operator character verbatim.
    ///
    /// Consecutive operators are accepted here; evaluation rejects them.
    /// Returns `false`, leaving the buffer untouched, for any other character.
    pub fn append_digit_or_operator(&mut self, token: char) -> bool {
        if let Some(op) = Operator::from_char(token) {
            self.append_operator(op);
            return true;
        }
        self.append_digit(token)
    }

    /// Append an ASCII digit. After a result or an error this starts a new
    /// expression. Returns `false` for non-digits.
    pub fn append_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            debug!(?digit, "ignoring non-digit input");
            return false;
        }
        self.begin_append(false);
        self.text.push(digit);
        true
    }

    /// Append an operator. After a result the expression continues from
    /// the result; after an error it starts over.
    pub fn append_operator(&mut self, op: Operator) {
        self.begin_append(true);
        self.text.push(op.symbol());
    }

    /// Insert a decimal point into the number being typed.
    ///
    /// An empty buffer becomes `0.`, a buffer ending in an operator gets
    /// `0.` appended, and a number that already has a point is left alone.
    pub fn append_decimal_point(&mut self) {
        self.begin_append(false);
        if self.text.is_empty() {
            self.text.push_str("0.");
            return;
        }
        let run = self.current_run();
        if run.contains('.') {
            return;
        }
        if run.is_empty() {
            self.text.push_str("0.");
        } else {
            self.text.push('.');
        }
    }

    /// Evaluate the buffer and replace it with the result.
    ///
    /// One trailing operator or decimal point is dropped first. Failures
    /// never escape: the buffer becomes [`ERROR_MARKER`] and the error is
    /// returned in [`Evaluation::Failed`].
    pub fn evaluate(&mut self) -> Evaluation {
        let mut expression = self.text.as_str();
        if expression.ends_with(|c: char| is_operator_char(c) || c == '.') {
            expression = &expression[..expression.len() - 1];
        }
        if expression.is_empty() {
            self.clear();
            return Evaluation::Empty;
        }

        match eval::evaluate(expression) {
            Ok(value) => {
                self.text = format_value(value);
                self.state = EditorState::Result;
                Evaluation::Value(value)
            }
            Err(err) => {
                self.text = ERROR_MARKER.to_string();
                self.state = EditorState::Error;
                Evaluation::Failed(err)
            }
        }
    }

    /// The numeric run at the end of the buffer (empty after an operator).
    fn current_run(&self) -> &str {
        self.text
            .rsplit(is_operator_char)
            .next()
            .unwrap_or_default()
    }

    /// Leave the result or error state before appending.
    ///
    /// A result survives only when the append continues it (operators).
    fn begin_append(&mut self, continues_result: bool) {
        match self.state {
            EditorState::Error => self.text.clear(),
            EditorState::Result if !continues_result => self.text.clear(),
            _ => {}
        }
        self.state = EditorState::Typing;
    }
}
