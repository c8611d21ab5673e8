//! Finding dice tokens in free-form message text.
//!
//! Messages are scanned twice: first for bare dice with an implicit count of one (`d20`), then for dice with an
//! explicit count (`3d6`). All bare dice come before all counted dice in the result, each group in the order it
//! appears in the text. Substitution relies on this exact order, so it is not merged into a single left-to-right
//! pass.

use std::sync::LazyLock;

use regex::{Captures, Match, Regex};

use super::{Dice, Error};

/// `d`/`D` followed by digits. The "not preceded by a digit" half of the rule is checked by hand since [`regex`] has
/// no lookbehind, and the greedy digit run already guarantees no digit follows.
#[expect(clippy::expect_used, reason = "Constant pattern")]
static BARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[dD]([0-9]+)").expect("bare dice pattern is valid"));

/// Digits, `d`/`D`, digits.
#[expect(clippy::expect_used, reason = "Constant pattern")]
static COUNTED: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([0-9]+)[dD]([0-9]+)").expect("counted dice pattern is valid"));

/// Finds every dice token in `text`, bare dice first and counted dice second.
///
/// # Errors
/// If a token has zero sides, zero dice, or numbers too large to roll, an error variant is returned.
///
/// # Examples
/// ```
/// use saikoro::dice::{scan, Dice};
///
/// let tokens = scan::tokens("attack 2d6+3, then d20")?;
/// assert_eq!(tokens, vec![Dice::new("d20", 1, 20), Dice::new("2d6", 2, 6)]);
/// # Ok::<(), saikoro::dice::Error>(())
/// ```
pub fn tokens(text: &str) -> Result<Vec<Dice<'_>>, Error> {
	let bare = BARE
		.captures_iter(text)
		.filter(|caps| !preceded_by_digit(text, whole(caps)))
		.map(|caps| token(whole(&caps), None, caps.get(1)));
	let counted = COUNTED
		.captures_iter(text)
		.map(|caps| token(whole(&caps), caps.get(1), caps.get(2)));

	bare.chain(counted).collect()
}

/// Builds a validated token from the whole match and its count (absent for bare dice) and sides groups.
fn token<'a>(key: Match<'a>, count: Option<Match<'a>>, sides: Option<Match<'a>>) -> Result<Dice<'a>, Error> {
	let key = key.as_str();
	let number = |group: Option<Match<'a>>| -> Result<u32, Error> {
		group
			.map_or("", |m| m.as_str())
			.parse()
			.map_err(|_overflow| Error::TooLarge(key.to_owned()))
	};

	let count = match count {
		Some(group) => number(Some(group))?,
		None => 1,
	};
	let sides = number(sides)?;

	if sides == 0 {
		return Err(Error::NoSides(key.to_owned()));
	}
	if count == 0 {
		return Err(Error::NoDice(key.to_owned()));
	}

	Ok(Dice::new(key, count, sides))
}

/// Gets the entire match of a set of captures.
fn whole<'a>(caps: &Captures<'a>) -> Match<'a> {
	caps.get(0).unwrap_or_else(|| unreachable!("group 0 always participates in a match"))
}

/// Checks whether the character right before a match is an ASCII digit.
fn preceded_by_digit(text: &str, found: Match<'_>) -> bool {
	text[..found.start()].chars().next_back().is_some_and(|c| c.is_ascii_digit())
}
