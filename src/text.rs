//! Substituting rolled dice back into message text.

use crate::dice::{Error, Rolled};

/// Message text with every rolled dice token substituted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[expect(clippy::exhaustive_structs, reason = "Plain result record")]
pub struct Resolved {
	/// Text for showing to people: tokens replaced by their individual rolls, e.g. `[3,5]`
	pub display: String,

	/// Text for calculating: tokens replaced by the sum of their rolls, e.g. `8`
	pub calculate: String,
}

/// Substitutes each set of rolls into `text`, in the order given.
///
/// Every set replaces only the first occurrence of its key that remains in the working copy of the text. The
/// working copy includes whatever earlier substitutions produced, so a bare `d6` substituted first can land inside
/// a later `2d6` token, leaving that token without a match. Keys that are not found are skipped.
///
/// # Errors
/// If a set of rolls overflows while being totalled, an error variant is returned.
///
/// # Examples
/// ```
/// use saikoro::{dice::{Dice, Rolled}, text};
///
/// let rolled = Rolled::from_dice_and_rolls(Dice::new("2d6", 2, 6), [3, 5]);
/// let resolved = text::substitute("2d6 + 1", &[rolled])?;
/// assert_eq!(resolved.display, "[3,5] + 1");
/// assert_eq!(resolved.calculate, "8 + 1");
/// # Ok::<(), saikoro::dice::Error>(())
/// ```
pub fn substitute(text: &str, rolled: &[Rolled<'_>]) -> Result<Resolved, Error> {
	let mut display = text.to_owned();
	let mut calculate = text.to_owned();

	for rolls in rolled {
		display = display.replacen(rolls.key(), &rolls.describe(), 1);
		calculate = calculate.replacen(rolls.key(), &rolls.total()?.to_string(), 1);
	}

	Ok(Resolved { display, calculate })
}
