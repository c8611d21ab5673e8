//! AST-like data structures for evaluating calculation strings and classifying their results.

use std::fmt;

/// Individual elements of a calculation expression
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Expr {
	/// Standalone number
	Num(f64),

	/// Negation of an expression (makes the result of it negative)
	Neg(Box<Self>),

	/// Sum of two expressions
	Add(Box<Self>, Box<Self>),

	/// Difference of two expressions
	Sub(Box<Self>, Box<Self>),

	/// Product of two expressions
	Mul(Box<Self>, Box<Self>),

	/// Quotient of two expressions
	Div(Box<Self>, Box<Self>),

	/// Comparison of two expressions. Only valid as the outermost expression.
	Cmp(Comparison, Box<Self>, Box<Self>),
}

impl Expr {
	/// Evaluates the expression and classifies which kinds of operations it used.
	///
	/// Only `+`, `-`, `*` and `/` count as arithmetic; a comparison between plain numbers or negations reports
	/// [`Evaluation::did_arithmetic`] as `false` even though both sides were evaluated.
	///
	/// Evaluation recurses once per level of the tree. Parsed expressions are at most one level deeper than
	/// [`MAX_OPERATORS`](crate::parse::MAX_OPERATORS) allows.
	///
	/// # Errors
	/// If a divisor evaluates to zero, or a comparison is found anywhere other than the outermost expression, an
	/// error variant is returned.
	///
	/// # Examples
	/// ```
	/// use saikoro::Expr;
	///
	/// let evaluation = "3+5 > 5".parse::<Expr>()?.eval()?;
	/// assert!(evaluation.did_arithmetic && evaluation.did_comparison);
	/// assert_eq!(evaluation.arithmetic_value, 8.0);
	/// assert!(evaluation.comparison_outcome);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	pub fn eval(&self) -> Result<Evaluation, EvalError> {
		let mut tally = Tally::default();

		if let Self::Cmp(cmp, lhs, rhs) = self {
			let lhs = lhs.calc(&mut tally)?;
			let rhs = rhs.calc(&mut tally)?;
			let comparison_outcome = cmp.apply(lhs, rhs);

			return Ok(Evaluation {
				did_arithmetic: tally.arithmetic,
				arithmetic_value: if tally.arithmetic { lhs } else { 0.0 },
				did_comparison: true,
				comparison_outcome,
			});
		}

		let value = self.calc(&mut tally)?;
		Ok(Evaluation {
			did_arithmetic: tally.arithmetic,
			arithmetic_value: value,
			did_comparison: false,
			comparison_outcome: false,
		})
	}

	/// Calculates the numeric value of a non-comparison expression, recording arithmetic use in `tally`.
	fn calc(&self, tally: &mut Tally) -> Result<f64, EvalError> {
		let (a, b) = match self {
			Self::Num(x) => return Ok(*x),
			Self::Neg(x) => return Ok(-x.calc(tally)?),
			Self::Add(a, b) | Self::Sub(a, b) | Self::Mul(a, b) | Self::Div(a, b) => {
				(a.calc(tally)?, b.calc(tally)?)
			}
			Self::Cmp(..) => return Err(EvalError::MisplacedComparison(self.clone())),
		};

		tally.arithmetic = true;
		Ok(match self {
			Self::Add(..) => a + b,
			Self::Sub(..) => a - b,
			Self::Mul(..) => a * b,
			_ if b == 0.0 => return Err(EvalError::DivisionByZero(self.clone())),
			_ => a / b,
		})
	}

	/// Checks whether a comparison exists anywhere below the outermost expression.
	#[must_use]
	pub fn has_nested_comparison(&self) -> bool {
		match self {
			Self::Cmp(_, a, b) => a.has_comparison() || b.has_comparison(),
			_ => self.has_comparison(),
		}
	}

	/// Checks whether a comparison exists anywhere in the expression, including the outermost expression.
	#[must_use]
	pub fn has_comparison(&self) -> bool {
		match self {
			Self::Num(..) => false,
			Self::Neg(x) => x.has_comparison(),
			Self::Add(a, b) | Self::Sub(a, b) | Self::Mul(a, b) | Self::Div(a, b) => {
				a.has_comparison() || b.has_comparison()
			}
			Self::Cmp(..) => true,
		}
	}

	/// Splits a binary expression into its operator symbol and operands.
	fn binary(&self) -> Option<(&'static str, &Self, &Self)> {
		match self {
			Self::Add(a, b) => Some(("+", a, b)),
			Self::Sub(a, b) => Some(("-", a, b)),
			Self::Mul(a, b) => Some(("*", a, b)),
			Self::Div(a, b) => Some(("/", a, b)),
			Self::Cmp(cmp, a, b) => Some((cmp.symbol(), a, b)),
			Self::Num(..) | Self::Neg(..) => None,
		}
	}

	/// Binding strength of the expression's outermost operation; higher binds tighter.
	const fn precedence(&self) -> u8 {
		match self {
			Self::Cmp(..) => 0,
			Self::Add(..) | Self::Sub(..) => 1,
			Self::Mul(..) | Self::Div(..) => 2,
			Self::Neg(..) => 3,
			Self::Num(..) => 4,
		}
	}

	/// Writes an operand, wrapped in parentheses when it would otherwise regroup on re-parsing.
	fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, operand: &Self, right: bool) -> fmt::Result {
		let needs_parens = operand.precedence() < self.precedence()
			|| (right && operand.precedence() == self.precedence() && !matches!(self, Self::Neg(..)));
		if needs_parens {
			write!(f, "({operand})")
		} else {
			write!(f, "{operand}")
		}
	}
}

impl fmt::Display for Expr {
	/// Formats the expression so that re-parsing the output yields the same tree. Parentheses are only added where
	/// precedence or left-associativity would otherwise change the grouping.
	///
	/// # Examples
	/// ```
	/// use saikoro::Expr;
	///
	/// let expr = "(2 + 3) * -4 >= 1 - (2 - 3)".parse::<Expr>()?;
	/// assert_eq!(expr.to_string(), "(2 + 3) * -4 >= 1 - (2 - 3)");
	/// # Ok::<(), saikoro::parse::Error>(())
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Num(x) => write!(f, "{x}"),
			Self::Neg(x) => {
				f.write_str("-")?;
				self.fmt_operand(f, x, false)
			}
			_ => {
				let Some((symbol, a, b)) = self.binary() else {
					return Ok(());
				};
				self.fmt_operand(f, a, false)?;
				write!(f, " {symbol} ")?;
				self.fmt_operand(f, b, true)
			}
		}
	}
}

/// Comparison operators. Equality is deliberately absent from the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Fixed by the grammar")]
pub enum Comparison {
	/// `>`
	Gt,

	/// `<`
	Lt,

	/// `>=`
	Ge,

	/// `<=`
	Le,
}

impl Comparison {
	/// Applies the comparison to a pair of values.
	#[must_use]
	pub fn apply(self, lhs: f64, rhs: f64) -> bool {
		match self {
			Self::Gt => lhs > rhs,
			Self::Lt => lhs < rhs,
			Self::Ge => lhs >= rhs,
			Self::Le => lhs <= rhs,
		}
	}

	/// Gets the operator's symbol as written in expressions.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Gt => ">",
			Self::Lt => "<",
			Self::Ge => ">=",
			Self::Le => "<=",
		}
	}
}

impl fmt::Display for Comparison {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

/// Classified result of evaluating an [`Expr`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[expect(clippy::exhaustive_structs, reason = "Plain result record")]
pub struct Evaluation {
	/// Whether any `+`, `-`, `*` or `/` operation was evaluated
	pub did_arithmetic: bool,

	/// Value of the whole expression, or of the comparison's left side when there is a comparison.
	/// Always `0` for a comparison without arithmetic.
	pub arithmetic_value: f64,

	/// Whether the expression was a comparison
	pub did_comparison: bool,

	/// Result of the comparison; `false` when there was none
	pub comparison_outcome: bool,
}

/// Flags collected while walking a single expression tree
#[derive(Debug, Default)]
struct Tally {
	/// Set once any binary arithmetic operation has been evaluated
	arithmetic: bool,
}

/// Error that can occur during [`Expr::eval()`]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
	/// The divisor of a division evaluated to zero
	#[error("division by zero while calculating {0}")]
	DivisionByZero(Expr),

	/// A comparison was nested inside another expression
	#[error("comparison {0} must be the outermost operation")]
	MisplacedComparison(Expr),
}
