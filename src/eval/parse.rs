use super::error::{EvalError, Result};
use super::token::{Operator, Range, Token};

/// Parse a token stream into an expression tree.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := operand (('*' | '/') operand)*
/// operand := ('+' | '-')* number
/// ```
///
/// # Errors
///
/// Returns an [`EvalError`] pointing at the first token that does not fit
/// the grammar, or at the end of input when an operand is missing.
pub fn parse(tokens: &[Token]) -> Result<Expr> {
    let end = tokens.last().map_or(0, |t| t.range().end);
    let mut parser = Parser {
        tokens,
        cursor: 0,
        end,
    };
    let expr = parser.sum()?;
    // A literal is always one maximal token and every operator is consumed
    // by `sum` or `product`, so nothing can be left over.
    debug_assert!(parser.peek().is_none());
    Ok(expr)
}

/// An expression tree.
///
/// Runs of equal-precedence operators are kept flat in a [`Expr::Chain`],
/// so the tree depth does not grow with the input length.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Neg(Box<Expr>),
    /// `first op operand op operand ...`, folded left to right.
    Chain { first: Box<Expr>, rest: Vec<Link> },
}

/// One `op operand` step of a [`Expr::Chain`].
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub op: Operator,
    pub operand: Expr,
    /// Location of the operator, used to report division by zero.
    pub range: Range,
}

impl Expr {
    /// Compute the value of this expression.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when a divisor evaluates to zero.
    pub fn eval(&self) -> Result<f64> {
        match self {
            Self::Num(val) => Ok(*val),
            Self::Neg(inner) => Ok(-inner.eval()?),
            Self::Chain { first, rest } => {
                let mut acc = first.eval()?;
                for link in rest {
                    let rhs = link.operand.eval()?;
                    if link.op == Operator::Div && rhs == 0.0 {
                        return Err(EvalError::DivisionByZero {
                            pos: link.range.start,
                        });
                    }
                    acc = link.op.apply(acc, rhs);
                }
                Ok(acc)
            }
        }
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    end: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// Consume the next token if it is an operator of the given precedence.
    fn next_op(&mut self, precedence: u8) -> Option<(Operator, Range)> {
        match self.peek()? {
            Token::Op { op, range } if op.precedence() == precedence => {
                self.cursor += 1;
                Some((op, range))
            }
            _ => None,
        }
    }

    fn sum(&mut self) -> Result<Expr> {
        self.chain(1, Self::product)
    }

    fn product(&mut self) -> Result<Expr> {
        self.chain(2, Self::operand)
    }

    fn chain(
        &mut self,
        precedence: u8,
        mut next: impl FnMut(&mut Self) -> Result<Expr>,
    ) -> Result<Expr> {
        let first = next(self)?;
        let mut rest = Vec::new();
        while let Some((op, range)) = self.next_op(precedence) {
            let operand = next(self)?;
            rest.push(Link { op, operand, range });
        }
        if rest.is_empty() {
            return Ok(first);
        }
        Ok(Expr::Chain {
            first: Box::new(first),
            rest,
        })
    }

    fn operand(&mut self) -> Result<Expr> {
        let mut negate = false;
        loop {
            match self.next() {
                Some(Token::Num { val, .. }) => {
                    let num = Expr::Num(val);
                    return Ok(if negate { Expr::Neg(Box::new(num)) } else { num });
                }
                Some(Token::Op {
                    op: Operator::Sub, ..
                }) => negate = !negate,
                Some(Token::Op {
                    op: Operator::Add, ..
                }) => {}
                Some(Token::Op { range, .. }) => {
                    return Err(EvalError::UnexpectedOperator { pos: range.start });
                }
                None => return Err(EvalError::MissingOperand { pos: self.end }),
            }
        }
    }
}
