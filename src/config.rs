//! Settings for resolving messages and wording replies.

use std::{env, num::ParseIntError};

/// Environment variable holding [`Config::max_dice`]
pub const MAX_DICE_VAR: &str = "SAIKORO_MAX_DICE";

/// Environment variable holding [`Labels::success`]
pub const SUCCESS_LABEL_VAR: &str = "SAIKORO_SUCCESS_LABEL";

/// Environment variable holding [`Labels::failure`]
pub const FAILURE_LABEL_VAR: &str = "SAIKORO_FAILURE_LABEL";

/// Settings for resolving messages
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
	/// Most dice a single message may roll, across all of its tokens
	pub max_dice: u32,

	/// Words used for comparison outcomes in replies
	pub labels: Labels,
}

impl Config {
	/// Default for [`Self::max_dice`]
	pub const DEFAULT_MAX_DICE: u32 = 1000;

	/// Builds a config from the defaults, overridden by any of [`MAX_DICE_VAR`], [`SUCCESS_LABEL_VAR`] and
	/// [`FAILURE_LABEL_VAR`] that are set.
	///
	/// # Errors
	/// If [`MAX_DICE_VAR`] is set but isn't a valid number, an error variant is returned.
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Builds a config from the defaults, overridden by whatever `lookup` finds for each variable name.
	///
	/// # Errors
	/// If the max dice variable is found but isn't a valid number, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use saikoro::config::{Config, MAX_DICE_VAR};
	///
	/// let config = Config::from_lookup(|name| (name == MAX_DICE_VAR).then(|| "20".to_owned()))?;
	/// assert_eq!(config.max_dice, 20);
	/// assert_eq!(config.labels.success, "成功");
	/// # Ok::<(), saikoro::config::Error>(())
	/// ```
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let mut config = Self::default();

		if let Some(max_dice) = lookup(MAX_DICE_VAR) {
			config.max_dice = max_dice.trim().parse().map_err(|err| Error::Invalid {
				var: MAX_DICE_VAR,
				value: max_dice.clone(),
				source: err,
			})?;
		}
		if let Some(success) = lookup(SUCCESS_LABEL_VAR) {
			config.labels.success = success;
		}
		if let Some(failure) = lookup(FAILURE_LABEL_VAR) {
			config.labels.failure = failure;
		}

		Ok(config)
	}

	/// Replaces the max dice limit.
	#[must_use]
	pub const fn max_dice(mut self, max_dice: u32) -> Self {
		self.max_dice = max_dice;
		self
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_dice: Self::DEFAULT_MAX_DICE,
			labels: Labels::default(),
		}
	}
}

/// Words shown for the outcome of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "There are only two outcomes")]
pub struct Labels {
	/// Shown when the comparison holds
	pub success: String,

	/// Shown when it doesn't
	pub failure: String,
}

impl Labels {
	/// Picks the label for an outcome.
	#[must_use]
	pub fn for_outcome(&self, outcome: bool) -> &str {
		if outcome {
			&self.success
		} else {
			&self.failure
		}
	}
}

impl Default for Labels {
	/// Creates the stock labels, "成功" (success) and "失敗" (failure).
	fn default() -> Self {
		Self {
			success: "成功".to_owned(),
			failure: "失敗".to_owned(),
		}
	}
}

/// An error resulting from loading a [`Config`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A variable was set to something that couldn't be understood.
	#[error("{var} has an invalid value {value:?}: {source}")]
	Invalid {
		/// Name of the variable
		var: &'static str,

		/// Value that was found
		value: String,

		/// Reason it was rejected
		#[source]
		source: ParseIntError,
	},
}
