//! Parser generators for calculation expressions, built on [chumsky].
//!
//! Grammar, from loosest to tightest binding:
//! - an optional single comparison (`>`, `<`, `>=`, `<=`) between two sums
//! - left-associative sums (`+`, `-`)
//! - left-associative products (`*`, `/`)
//! - unary negation (`-`)
//! - numbers, or any expression (comparisons included) wrapped in parentheses
//!
//! Whitespace (space, tab, form feed, carriage return and line feed only) is allowed between any two tokens. A
//! comparison is only accepted as the outermost operation.
//!
//! Inputs with parentheses nested deeper than [`MAX_NESTING`] or more than [`MAX_OPERATORS`] operator characters are
//! rejected before the grammar runs, which keeps the depth of the resulting [`Expr`] tree bounded.

use std::{fmt, ops::Range, str::FromStr};

use chumsky::prelude::*;

use crate::expr::{Comparison, Expr};

/// Deepest nesting of parentheses accepted in a calculation
pub const MAX_NESTING: usize = 64;

/// Most operator characters (`+`, `-`, `*`, `/`, `<`, `>`) accepted in a calculation
pub const MAX_OPERATORS: usize = 1024;

/// Characters skipped between tokens
const WHITESPACE: &str = " \t\x0c\r\n";

/// Checks an input against [`MAX_NESTING`] and [`MAX_OPERATORS`], pointing at the first character over a limit.
fn check_limits(input: &str) -> Result<(), Detail> {
	let mut depth = 0_usize;
	let mut operators = 0_usize;

	for (idx, c) in input.char_indices() {
		let message = match c {
			'(' => {
				depth += 1;
				(depth > MAX_NESTING).then(|| format!("parentheses nested deeper than {MAX_NESTING}"))
			}
			')' => {
				depth = depth.saturating_sub(1);
				None
			}
			'+' | '-' | '*' | '/' | '<' | '>' => {
				operators += 1;
				(operators > MAX_OPERATORS).then(|| format!("more than {MAX_OPERATORS} operators"))
			}
			_ => None,
		};

		if let Some(message) = message {
			return Err(Detail {
				span: idx..idx + c.len_utf8(),
				message,
			});
		}
	}

	Ok(())
}

/// Generates a parser that fails when the whole input is over [`MAX_NESTING`] or [`MAX_OPERATORS`], without
/// consuming any of it. Its error may be reported at the end of the input; [`Expr::from_str()`] reports the exact
/// position instead.
pub fn within_limits<'src>() -> impl Parser<'src, &'src str, (), extra::Err<Rich<'src, char>>> + Clone {
	any()
		.repeated()
		.to_slice()
		.try_map(|input: &str, span: SimpleSpan| {
			check_limits(input).map_err(|detail| {
				Rich::custom(
					SimpleSpan::new(span.start + detail.span.start, span.start + detail.span.end),
					detail.message,
				)
			})
		})
		.rewind()
}

/// Generates a parser for non-negative decimal numbers like `42`, `4.`, `4.2`, `.42` or `4.2e-1`.
///
/// A leading `-` is never part of a number; it is parsed as negation by [`expr_part()`].
pub fn number<'src>() -> impl Parser<'src, &'src str, f64, extra::Err<Rich<'src, char>>> + Clone {
	let digits = text::digits(10).collect::<String>();

	let mantissa = choice((
		digits
			.clone()
			.then(just('.').ignore_then(digits.clone().or_not()).or_not())
			.map(|(whole, frac)| match frac {
				Some(frac) => format!("{whole}.{}", frac.unwrap_or_else(|| "0".to_owned())),
				None => whole,
			}),
		just('.').ignore_then(digits.clone()).map(|frac| format!("0.{frac}")),
	));

	let exponent = one_of("eE")
		.ignore_then(one_of("+-").or_not())
		.then(digits)
		.map(|(sign, exp)| format!("e{}{exp}", sign.map(String::from).unwrap_or_default()));

	mantissa
		.then(exponent.or_not())
		.try_map(|(mantissa, exponent), span| {
			format!("{mantissa}{}", exponent.unwrap_or_default())
				.parse::<f64>()
				.map_err(|err| Rich::custom(span, format!("Number: {err}")))
		})
}

/// Generates a parser that handles full expressions including arithmetic, comparisons and grouping with
/// parentheses. Comparisons are accepted at any depth; see [`expr()`] for the placement rule. Input size isn't
/// limited here either; see [`within_limits()`].
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	let ws = one_of(WHITESPACE).repeated();

	// Helper function for operators
	let op = move |c| just(c).padded_by(ws);

	recursive(|comparison| {
		// Parser for numbers or expressions enclosed in parentheses
		let atom = number()
			.map(Expr::Num)
			.or(comparison.delimited_by(just('('), just(')')))
			.padded_by(ws);

		// Parser for negative sign
		let unary = op('-').repeated().foldr(atom, |_op, rhs| Expr::Neg(Box::new(rhs)));

		// Parser for multiplication and division
		let product = unary.clone().foldl(
			choice((op('*').to(Expr::Mul as fn(_, _) -> _), op('/').to(Expr::Div as fn(_, _) -> _)))
				.then(unary)
				.repeated(),
			|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
		);

		// Parser for addition and subtraction
		let sum = product.clone().foldl(
			choice((op('+').to(Expr::Add as fn(_, _) -> _), op('-').to(Expr::Sub as fn(_, _) -> _)))
				.then(product)
				.repeated(),
			|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
		);

		// Parser for a single, non-chaining comparison
		let cmp = choice((
			just(">=").to(Comparison::Ge),
			just("<=").to(Comparison::Le),
			just(">").to(Comparison::Gt),
			just("<").to(Comparison::Lt),
		))
		.padded_by(ws);

		sum.clone().then(cmp.then(sum).or_not()).map(|(lhs, rhs)| match rhs {
			Some((cmp, rhs)) => Expr::Cmp(cmp, Box::new(lhs), Box::new(rhs)),
			None => lhs,
		})
	})
}

/// Generates a parser that handles full expressions, expects end of input, and only accepts a comparison as the
/// outermost operation (parentheses around it are fine). The input must also be [`within_limits()`].
///
/// # Examples
/// ```
/// use chumsky::Parser;
/// use saikoro::{expr::Comparison, parse, Expr};
///
/// let parsed = parse::expr().parse("(12 + 5 > 15)").into_result();
/// assert!(matches!(parsed, Ok(Expr::Cmp(Comparison::Gt, ..))));
///
/// assert!(parse::expr().parse("1 > 2 > 3").has_errors());
/// assert!(parse::expr().parse("(1 > 2) + 3").has_errors());
/// let many_minuses = "-".repeat(5000);
/// assert!(parse::expr().parse(&many_minuses).has_errors());
/// ```
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	within_limits().ignore_then(expr_part()).then_ignore(end()).try_map(|expr, span| {
		if expr.has_nested_comparison() {
			Err(Rich::custom(span, "a comparison must be the outermost operation"))
		} else {
			Ok(expr)
		}
	})
}

/// A failure to parse a calculation expression, with every problem the parser found
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Error {
	/// Each problem found, in order
	pub details: Vec<Detail>,
}

/// A single problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Plain diagnostic record")]
pub struct Detail {
	/// Byte range of the input the problem applies to
	pub span: Range<usize>,

	/// Description of the problem
	pub message: String,
}

impl Error {
	/// Collects chumsky's errors into an owned error.
	fn from_rich(errs: Vec<Rich<'_, char>>) -> Self {
		Self {
			details: errs
				.into_iter()
				.map(|err| Detail {
					span: err.span().start..err.span().end,
					message: err.to_string(),
				})
				.collect(),
		}
	}
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let messages = self.details.iter().map(|detail| detail.message.as_str()).collect::<Vec<_>>();
		write!(f, "{}", messages.join("; "))
	}
}

impl FromStr for Expr {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		check_limits(s).map_err(|detail| Error { details: vec![detail] })?;
		expr().parse(s).into_result().map_err(Error::from_rich)
	}
}
