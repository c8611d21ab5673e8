//! Wording the reply for a resolved message.

use crate::{config::Labels, resolve::Resolution};

/// Separator between the parts of a reply
pub const SEPARATOR: &str = " => ";

/// Renders a value without a fractional part when it is a whole number, or as a regular float otherwise.
/// Non-numbers render as `nan`, next to `inf` and `-inf`.
///
/// # Examples
/// ```
/// use saikoro::reply::format_value;
///
/// assert_eq!(format_value(17.0), "17");
/// assert_eq!(format_value(-0.0), "0");
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(f64::INFINITY), "inf");
/// assert_eq!(format_value(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 {
		// Covers -0.0, which prints as "-0" with any precision
		if value == 0.0 {
			return "0".to_owned();
		}
		format!("{value:.0}")
	} else if value.is_nan() {
		"nan".to_owned()
	} else {
		value.to_string()
	}
}

impl Resolution {
	/// Builds the reply for the message, joining the display text, the value and the comparison outcome:
	/// - arithmetic and comparison: `[12]+5 > 15 => 17 => 成功`
	/// - comparison alone: `[12] > 15 => 失敗`
	/// - arithmetic alone, or a single number: `[12]+5 => 17`
	///
	/// # Examples
	/// ```
	/// use saikoro::{config::Config, dice::roller::Iter as IterRoller, resolve_with};
	///
	/// let config = Config::default();
	/// let resolution = resolve_with("d20+5 > 15", &mut IterRoller::new([12]), &config)?.expect("has dice");
	/// assert_eq!(resolution.reply(&config.labels), "[12]+5 > 15 => 17 => 成功");
	/// # Ok::<(), saikoro::resolve::Error>(())
	/// ```
	#[must_use]
	pub fn reply(&self, labels: &Labels) -> String {
		let eval = &self.evaluation;
		let mut parts = vec![self.text.display.clone()];

		if eval.did_arithmetic || !eval.did_comparison {
			parts.push(format_value(eval.arithmetic_value));
		}
		if eval.did_comparison {
			parts.push(labels.for_outcome(eval.comparison_outcome).to_owned());
		}

		parts.join(SEPARATOR)
	}
}
