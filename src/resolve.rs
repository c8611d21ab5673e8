//! The full message pipeline: find and roll dice, substitute them, then parse and evaluate the result.

use tracing::{debug, trace};

#[cfg(feature = "fastrand")]
use crate::dice::roller::FastRand as FastRandRoller;
use crate::{
	config::Config,
	dice::{self, Roller},
	expr::{EvalError, Evaluation, Expr},
	parse,
	text::{self, Resolved},
};

/// A message that contained dice and resolved to a result
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "Plain result record")]
pub struct Resolution {
	/// The message with its dice substituted
	pub text: Resolved,

	/// Classified result of evaluating [`Resolved::calculate`]
	pub evaluation: Evaluation,
}

/// Resolves a message with a freshly seeded roller and the default [`Config`].
/// Requires the `fastrand` feature (enabled by default).
///
/// # Errors
/// See [`resolve_with()`].
///
/// # Examples
/// ```
/// let resolution = saikoro::resolve("d6 + 10")?.expect("message has dice");
/// assert!((11.0..=16.0).contains(&resolution.evaluation.arithmetic_value));
///
/// assert_eq!(saikoro::resolve("no dice here")?, None);
/// # Ok::<(), saikoro::resolve::Error>(())
/// ```
#[cfg(feature = "fastrand")]
pub fn resolve(message: &str) -> Result<Option<Resolution>, Error> {
	resolve_with(message, &mut FastRandRoller::default(), &Config::default())
}

/// Resolves a message: rolls every dice token in it, substitutes the rolls, then evaluates the calculation string.
///
/// Returns `Ok(None)` when the message has no dice at all. Every error is also a reason to stay silent; they are
/// separated so callers can log or explain them.
///
/// # Errors
/// If a dice token is invalid or the message rolls too many dice, the calculation string fails to parse, or its
/// evaluation fails (such as division by zero), an error variant is returned.
///
/// # Examples
/// ```
/// use saikoro::{config::Config, dice::roller::Iter as IterRoller, resolve_with};
///
/// let resolution = resolve_with("d20+5 > 15", &mut IterRoller::new([12]), &Config::default())?.expect("has dice");
/// assert_eq!(resolution.text.display, "[12]+5 > 15");
/// assert_eq!(resolution.text.calculate, "12+5 > 15");
/// assert_eq!(resolution.evaluation.arithmetic_value, 17.0);
/// assert!(resolution.evaluation.comparison_outcome);
/// # Ok::<(), saikoro::resolve::Error>(())
/// ```
pub fn resolve_with(message: &str, roller: &mut impl Roller, config: &Config) -> Result<Option<Resolution>, Error> {
	let rolled = dice::roll_all(message, roller, config.max_dice).inspect_err(|err| debug!(%err, "unrollable dice"))?;
	if rolled.is_empty() {
		trace!("no dice in message");
		return Ok(None);
	}

	let text = text::substitute(message, &rolled)?;
	trace!(display = %text.display, calculate = %text.calculate, "substituted dice");

	let expr = text.calculate.parse::<Expr>().map_err(|err| {
		debug!(%err, calculate = %text.calculate, "calculation did not parse");
		Error::Parse {
			calculate: text.calculate.clone(),
			source: err,
		}
	})?;
	let evaluation = expr
		.eval()
		.inspect_err(|err| debug!(%err, "calculation did not evaluate"))?;
	trace!(?evaluation, "evaluated");

	Ok(Some(Resolution { text, evaluation }))
}

/// Reason a message with dice could not be resolved
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// Dice-related error (likely an invalid token or too many dice)
	#[error("dice error: {0}")]
	Dice(#[from] dice::Error),

	/// The calculation string didn't match the grammar
	#[error("parse error in {calculate:?}: {source}")]
	Parse {
		/// Calculation string that failed to parse, which the error's spans refer to
		calculate: String,

		/// Problems the parser found
		#[source]
		source: parse::Error,
	},

	/// The calculation string parsed but couldn't be evaluated
	#[error("evaluation error: {0}")]
	Eval(#[from] EvalError),
}
