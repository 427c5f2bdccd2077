use super::error::{EvalError, Result};

/// One of the four arithmetic operators.
///
/// `Add` and `Sub` double as sign prefixes when they appear where an
/// operand is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

pub const fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Num { val: f64, range: Range },
    Op { op: Operator, range: Range },
}

impl Token {
    pub const fn range(&self) -> Range {
        match *self {
            Self::Num { range, .. } | Self::Op { range, .. } => range,
        }
    }
}

/// Half-open byte range into the tokenized input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub const fn range(start: usize, end: usize) -> Range {
    Range { start, end }
}

pub const fn pos(pos: usize) -> Range {
    range(pos, pos + 1)
}

/// Split `input` into number and operator tokens.
///
/// A number literal is a maximal run of digits and decimal points.
/// Two identical adjacent signs (`++`, `--`) are rejected.
///
/// # Errors
///
/// Returns [`EvalError::InvalidCharacter`] for anything outside the
/// grammar, [`EvalError::InvalidNumber`] for a literal such as `1.2.3`,
/// and [`EvalError::RepeatedSign`] for doubled signs.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            literal_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = literal_start.take() {
            tokens.push(complete_literal(input, start, i)?);
        }

        let op = Operator::from_char(c).ok_or(EvalError::InvalidCharacter { ch: c, pos: i })?;
        if op.is_sign()
            && let Some(Token::Op { op: prev, range }) = tokens.last()
            && *prev == op
            && range.end == i
        {
            return Err(EvalError::RepeatedSign { pos: i });
        }
        tokens.push(Token::Op { op, range: pos(i) });
    }

    if let Some(start) = literal_start {
        tokens.push(complete_literal(input, start, input.len())?);
    }

    Ok(tokens)
}

fn complete_literal(input: &str, start: usize, end: usize) -> Result<Token> {
    let val = input[start..end]
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber { start, end })?;
    Ok(Token::Num {
        val,
        range: range(start, end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(val: f64, start: usize, end: usize) -> Token {
        Token::Num {
            val,
            range: range(start, end),
        }
    }

    fn op(op: Operator, at: usize) -> Token {
        Token::Op { op, range: pos(at) }
    }

    #[test]
    fn test_simple_add() {
        assert_eq!(
            tokenize("432.5+24").unwrap(),
            vec![num(432.5, 0, 5), op(Operator::Add, 5), num(24.0, 6, 8)]
        );
    }

    #[test]
    fn test_all_operators() {
        assert_eq!(
            tokenize("1+2-3*4/5").unwrap(),
            vec![
                num(1.0, 0, 1),
                op(Operator::Add, 1),
                num(2.0, 2, 3),
                op(Operator::Sub, 3),
                num(3.0, 4, 5),
                op(Operator::Mul, 5),
                num(4.0, 6, 7),
                op(Operator::Div, 7),
                num(5.0, 8, 9),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_points() {
        assert_eq!(
            tokenize(".5*5.").unwrap(),
            vec![num(0.5, 0, 2), op(Operator::Mul, 2), num(5.0, 3, 5)]
        );
    }

    #[test]
    fn test_lone_point_is_invalid() {
        assert_eq!(
            tokenize("1+."),
            Err(EvalError::InvalidNumber { start: 2, end: 3 })
        );
    }

    #[test]
    fn test_mixed_signs_are_allowed() {
        assert_eq!(
            tokenize("5+-3").unwrap(),
            vec![
                num(5.0, 0, 1),
                op(Operator::Add, 1),
                op(Operator::Sub, 2),
                num(3.0, 3, 4),
            ]
        );
    }

    #[test]
    fn test_doubled_product_is_left_to_the_parser() {
        assert!(tokenize("5**3").is_ok());
    }

    #[test]
    fn test_whitespace_is_not_part_of_the_grammar() {
        assert_eq!(
            tokenize("1 + 2"),
            Err(EvalError::InvalidCharacter { ch: ' ', pos: 1 })
        );
    }

    #[test]
    fn test_operator_round_trips_through_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert!(!is_operator_char('.'));
    }
}
