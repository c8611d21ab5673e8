//! All functionality for finding dice in message text, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For turning the rolls back into text, see [`crate::text`].

pub mod roller;
pub mod scan;

use std::fmt;

pub use self::roller::Roller;

/// A dice token found in a message, such as `3d6` or `d20`.
///
/// The token borrows its [`key`](Self::key) from the message it was found in, since the key is only needed to
/// locate the text to substitute once the dice have been rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "Mirrors the notation, which has no room for more fields")]
pub struct Dice<'a> {
	/// Exact text the token was matched from
	pub key: &'a str,

	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,
}

impl<'a> Dice<'a> {
	/// Creates a new dice token for the given key, count and number of sides.
	#[must_use]
	pub const fn new(key: &'a str, count: u32, sides: u32) -> Self {
		Self { key, count, sides }
	}
}

impl fmt::Display for Dice<'_> {
	/// Formats the dice in the canonical `NdM` form, regardless of how the key was written.
	///
	/// # Examples
	/// ```
	/// use saikoro::Dice;
	///
	/// assert_eq!(Dice::new("D20", 1, 20).to_string(), "1d20");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)
	}
}

/// Representation of the result from rolling [`Dice`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Plain result record")]
pub struct Rolled<'a> {
	/// Dice that were rolled to produce this
	pub dice: Dice<'a>,

	/// Each individual die roll that was made, in roll order
	pub rolls: Vec<u32>,
}

impl<'a> Rolled<'a> {
	/// Creates a new rolled set of dice from a given set of dice and an iterator of values.
	#[must_use]
	pub fn from_dice_and_rolls(dice: Dice<'a>, rolls: impl IntoIterator<Item = u32>) -> Self {
		Self {
			dice,
			rolls: rolls.into_iter().collect(),
		}
	}

	/// Exact text in the message that these rolls replace.
	#[must_use]
	#[inline]
	pub const fn key(&self) -> &'a str {
		self.dice.key
	}

	/// Calculates the total of all roll values.
	///
	/// # Errors
	/// If there is an integer overflow while summing the die rolls, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use saikoro::dice::{Dice, Rolled};
	///
	/// let rolled = Rolled::from_dice_and_rolls(Dice::new("2d6", 2, 6), [3, 5]);
	/// assert_eq!(rolled.total()?, 8);
	/// # Ok::<(), saikoro::dice::Error>(())
	/// ```
	pub fn total(&self) -> Result<u64, Error> {
		self.rolls.iter().try_fold(0_u64, |sum, roll| {
			sum.checked_add(u64::from(*roll))
				.ok_or_else(|| Error::Overflow(self.dice.key.to_owned()))
		})
	}

	/// Builds the bracketed, comma-separated list of the individual rolls, e.g. `[3,5]`.
	#[must_use]
	pub fn describe(&self) -> String {
		let list = self.rolls.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
		format!("[{list}]")
	}
}

impl fmt::Display for Rolled<'_> {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe()`].
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

/// Scans a message for dice tokens and rolls every one of them, in the order [`scan::tokens()`] yields them.
///
/// The combined number of dice is checked against `limit` before anything is rolled.
///
/// # Errors
/// If a token is invalid or the message asks for more than `limit` dice in total, an error variant is returned.
///
/// # Examples
/// ```
/// use saikoro::dice::{self, roller::Iter as IterRoller};
///
/// let mut roller = IterRoller::new([4, 2, 6]);
/// let rolled = dice::roll_all("2d6 then d8", &mut roller, 100)?;
/// assert_eq!(rolled[0].key(), "d8");
/// assert_eq!(rolled[0].rolls, vec![4]);
/// assert_eq!(rolled[1].rolls, vec![2, 6]);
/// # Ok::<(), saikoro::dice::Error>(())
/// ```
pub fn roll_all<'a>(text: &'a str, roller: &mut impl Roller, limit: u32) -> Result<Vec<Rolled<'a>>, Error> {
	let tokens = scan::tokens(text)?;

	let requested = tokens.iter().map(|dice| u64::from(dice.count)).sum::<u64>();
	if requested > u64::from(limit) {
		return Err(Error::TooManyDice { requested, limit });
	}

	Ok(tokens.into_iter().map(|dice| roller.roll(dice)).collect())
}

/// An error resulting from a dice operation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A token asked for dice with zero sides, e.g. `d0`.
	#[error("{0} has dice without any sides")]
	NoSides(String),

	/// A token asked for zero dice, e.g. `0d6`.
	#[error("{0} does not roll any dice")]
	NoDice(String),

	/// A token's count or number of sides does not fit in the supported range.
	#[error("{0} is too large to roll")]
	TooLarge(String),

	/// The message asked for more dice than allowed in a single message.
	#[error("{requested} dice requested, but at most {limit} may be rolled per message")]
	TooManyDice {
		/// Total number of dice across all tokens
		requested: u64,

		/// Configured limit
		limit: u32,
	},

	/// There was an integer overflow when summing roll values.
	/// This normally should not ever happen given the types used for die counts, sides, and totals.
	#[error("integer overflow while totalling {0}")]
	Overflow(String),
}
