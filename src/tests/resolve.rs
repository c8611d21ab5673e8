use crate::{
	config::Config,
	dice::{self, roller::Iter as IterRoller},
	expr::{EvalError, Evaluation},
	resolve::{resolve, resolve_with, Error},
};

fn resolve_fixed(message: &str, rolls: &[u32]) -> Result<Option<crate::Resolution>, Error> {
	resolve_with(message, &mut IterRoller::new(rolls.to_vec()), &Config::default())
}

#[test]
fn seeded_attack_roll() {
	let resolution = resolve_fixed("d20+5 > 15", &[12]).unwrap().unwrap();
	assert_eq!(resolution.text.display, "[12]+5 > 15");
	assert_eq!(resolution.text.calculate, "12+5 > 15");
	assert_eq!(
		resolution.evaluation,
		Evaluation {
			did_arithmetic: true,
			arithmetic_value: 17.0,
			did_comparison: true,
			comparison_outcome: true,
		}
	);
}

#[test]
fn plain_roll_is_a_bare_number() {
	let resolution = resolve_fixed("3d6", &[1, 2, 3]).unwrap().unwrap();
	assert_eq!(resolution.text.display, "[1,2,3]");
	assert_eq!(resolution.text.calculate, "6");
	assert!(!resolution.evaluation.did_arithmetic);
	assert!(!resolution.evaluation.did_comparison);
	assert_eq!(resolution.evaluation.arithmetic_value, 6.0);
}

#[test]
fn comparison_only() {
	let resolution = resolve_fixed("d20 >= 10", &[9]).unwrap().unwrap();
	assert!(!resolution.evaluation.did_arithmetic);
	assert!(resolution.evaluation.did_comparison);
	assert!(!resolution.evaluation.comparison_outcome);
}

#[test]
fn no_dice_is_not_an_error() {
	assert_eq!(resolve_fixed("3 + 5 > 2", &[]).unwrap(), None);
	assert_eq!(resolve_fixed("hello there", &[]).unwrap(), None);
	assert_eq!(resolve_fixed("", &[]).unwrap(), None);
}

#[test]
fn chatter_around_dice_does_not_parse() {
	let err = resolve_fixed("rolling d20 for initiative", &[4]).unwrap_err();
	let Error::Parse { calculate, source } = err else {
		panic!("expected a parse error");
	};
	assert_eq!(calculate, "rolling 4 for initiative");
	assert!(!source.details.is_empty());
}

#[test]
fn chained_comparison_does_not_parse() {
	assert!(matches!(resolve_fixed("d6 > 2 > 1", &[3]), Err(Error::Parse { .. })));
}

#[test]
fn division_by_zero_is_an_error() {
	assert!(matches!(
		resolve_fixed("d10 / 0", &[7]),
		Err(Error::Eval(EvalError::DivisionByZero(..)))
	));
}

#[test]
fn invalid_dice_are_errors() {
	assert!(matches!(
		resolve_fixed("d0 + 1", &[]),
		Err(Error::Dice(dice::Error::NoSides(..)))
	));
	assert!(matches!(
		resolve_with("5000d6", &mut IterRoller::new(Vec::new()), &Config::default().max_dice(10)),
		Err(Error::Dice(dice::Error::TooManyDice { .. }))
	));
}

#[test]
fn interleaved_tokens_substitute_bare_first() {
	// d8 rolls first even though 2d4 comes first in the text
	let resolution = resolve_fixed("2d4 * d8", &[7, 1, 4]).unwrap().unwrap();
	assert_eq!(resolution.text.display, "[1,4] * [7]");
	assert_eq!(resolution.evaluation.arithmetic_value, 35.0);
}

#[test]
fn fractional_results() {
	let resolution = resolve_fixed("d6 / 4", &[5]).unwrap().unwrap();
	assert_eq!(resolution.evaluation.arithmetic_value, 1.25);
}

#[test]
fn random_rolls_resolve() {
	for _ in 0..100 {
		let resolution = resolve("2d6 + 1").unwrap().unwrap();
		assert!((3.0..=13.0).contains(&resolution.evaluation.arithmetic_value));
		assert!(resolution.evaluation.did_arithmetic);
	}
}

#[test]
fn runs_are_independent_across_threads() {
	let handles = (0..8)
		.map(|_| std::thread::spawn(|| resolve("d20 + d20 > 0").unwrap().unwrap().evaluation))
		.collect::<Vec<_>>();
	for handle in handles {
		let evaluation = handle.join().unwrap();
		assert!(evaluation.comparison_outcome);
		assert!((2.0..=40.0).contains(&evaluation.arithmetic_value));
	}
}

#[test]
fn runaway_nesting_is_an_error() {
	let parens = format!("d6+{}1{}", "(".repeat(5000), ")".repeat(5000));
	assert!(matches!(resolve_fixed(&parens, &[3]), Err(Error::Parse { .. })));

	let negations = format!("d6+{}1", "-".repeat(100_000));
	assert!(matches!(resolve_fixed(&negations, &[3]), Err(Error::Parse { .. })));
}

#[test]
fn only_ascii_whitespace_separates_tokens() {
	assert!(matches!(resolve_fixed("d20\u{3000}+\u{3000}5", &[3]), Err(Error::Parse { .. })));
	assert!(matches!(resolve_fixed("d20 + 5 \u{a0}", &[3]), Err(Error::Parse { .. })));

	let resolution = resolve_fixed("d20\t+ 5\n", &[3]).unwrap().unwrap();
	assert_eq!(resolution.evaluation.arithmetic_value, 8.0);
}
