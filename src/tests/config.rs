use crate::config::{Config, Error, Labels, FAILURE_LABEL_VAR, MAX_DICE_VAR, SUCCESS_LABEL_VAR};

#[test]
fn defaults() {
	let config = Config::default();
	assert_eq!(config.max_dice, Config::DEFAULT_MAX_DICE);
	assert_eq!(config.labels.for_outcome(true), "成功");
	assert_eq!(config.labels.for_outcome(false), "失敗");
}

#[test]
fn nothing_set_means_defaults() {
	assert_eq!(Config::from_lookup(|_| None).unwrap(), Config::default());
}

#[test]
fn everything_set() {
	let config = Config::from_lookup(|name| {
		let value = match name {
			MAX_DICE_VAR => " 50 ",
			SUCCESS_LABEL_VAR => "Success",
			FAILURE_LABEL_VAR => "Failure",
			_ => return None,
		};
		Some(value.to_owned())
	})
	.unwrap();

	assert_eq!(config.max_dice, 50);
	assert_eq!(
		config.labels,
		Labels {
			success: "Success".to_owned(),
			failure: "Failure".to_owned(),
		}
	);
}

#[test]
fn invalid_max_dice() {
	let err = Config::from_lookup(|name| (name == MAX_DICE_VAR).then(|| "lots".to_owned())).unwrap_err();
	assert!(matches!(err, Error::Invalid { var: MAX_DICE_VAR, .. }));
	assert!(err.to_string().contains("lots"));
}

#[test]
fn builder_override() {
	assert_eq!(Config::default().max_dice(3).max_dice, 3);
}
