use proptest::prelude::*;

use crate::dice::{
	self,
	roller::{FastRand as FastRandRoller, Iter as IterRoller, Max as MaxRoller, Roller, Val as ValRoller},
	Dice, Error, Rolled,
};

#[test]
fn single_d20() {
	let rolled = FastRandRoller::default().roll(Dice::new("d20", 1, 20));
	assert_eq!(rolled.rolls.len(), 1);
	rolls_in_range(&rolled.rolls, 20);
}

#[test]
fn hundred_d42s() {
	let rolled = FastRandRoller::default().roll(Dice::new("100d42", 100, 42));
	assert_eq!(rolled.rolls.len(), 100);
	assert_eq!(rolled.key(), "100d42");
	rolls_in_range(&rolled.rolls, 42);
}

#[test]
fn single_sided_dice_always_roll_one() {
	let rolled = FastRandRoller::default().roll(Dice::new("5d1", 5, 1));
	assert_eq!(rolled.rolls, vec![1; 5]);
}

#[test]
fn all_dice_sides_occur() {
	let mut roller = FastRandRoller::with_seed(0x5a1c0);
	let dice = Dice::new("255d20", 255, 20);
	let mut rolls = Vec::new();

	for _ in 1..=100 {
		rolls.append(&mut roller.roll(dice).rolls);
	}

	rolls_in_range(&rolls, 20);
	for side in 1..=20 {
		assert!(rolls.contains(&side));
	}
}

#[test]
fn seeded_rollers_repeat() {
	let dice = Dice::new("10d100", 10, 100);
	assert_eq!(
		FastRandRoller::with_seed(42).roll(dice),
		FastRandRoller::with_seed(42).roll(dice)
	);
}

#[test]
fn fixed_rollers() {
	let dice = Dice::new("3d8", 3, 8);
	assert_eq!(MaxRoller.roll(dice).rolls, vec![8, 8, 8]);
	assert_eq!(ValRoller(2).roll(dice).rolls, vec![2, 2, 2]);

	let mut roller = IterRoller::new([7, 1, 4, 9]);
	assert_eq!(roller.roll(dice).rolls, vec![7, 1, 4]);
	assert!(roller.can_roll());
	assert_eq!(roller.roll_die(8), 9);
	assert!(!roller.can_roll());
}

#[test]
fn totals_and_descriptions() {
	let rolled = Rolled::from_dice_and_rolls(Dice::new("2d6", 2, 6), [3, 5]);
	assert_eq!(rolled.total().unwrap(), 8);
	assert_eq!(rolled.describe(), "[3,5]");
	assert_eq!(rolled.to_string(), "[3,5]");

	let rolled = Rolled::from_dice_and_rolls(Dice::new("d20", 1, 20), [12]);
	assert_eq!(rolled.total().unwrap(), 12);
	assert_eq!(rolled.describe(), "[12]");
}

#[test]
fn totals_do_not_overflow_u32() {
	let rolled = Rolled::from_dice_and_rolls(Dice::new("3d4294967295", 3, u32::MAX), [u32::MAX; 3]);
	assert_eq!(rolled.total().unwrap(), 3 * u64::from(u32::MAX));
}

#[test]
fn dice_display_is_canonical() {
	assert_eq!(Dice::new("D6", 1, 6).to_string(), "1d6");
	assert_eq!(Dice::new("3d6", 3, 6).to_string(), "3d6");
}

#[test]
fn roll_all_orders_bare_before_counted() {
	let mut roller = IterRoller::new([1, 2, 3, 4, 5]);
	let rolled = dice::roll_all("2d6 d4 then 2d8", &mut roller, 100).unwrap();

	let summary = rolled.iter().map(|r| (r.key(), r.rolls.clone())).collect::<Vec<_>>();
	assert_eq!(
		summary,
		vec![("d4", vec![1]), ("2d6", vec![2, 3]), ("2d8", vec![4, 5])]
	);
}

#[test]
fn roll_all_enforces_limit_before_rolling() {
	let mut roller = IterRoller::new(Vec::new());
	let err = dice::roll_all("99999999d6", &mut roller, 1000).unwrap_err();
	assert_eq!(
		err,
		Error::TooManyDice {
			requested: 99_999_999,
			limit: 1000
		}
	);

	let err = dice::roll_all("600d6 + 401d6", &mut roller, 1000).unwrap_err();
	assert!(matches!(err, Error::TooManyDice { requested: 1001, .. }));
}

#[test]
fn roll_all_at_limit() {
	let rolled = dice::roll_all("d6 + 999d6", &mut MaxRoller, 1000).unwrap();
	assert_eq!(rolled.iter().map(|r| r.rolls.len()).sum::<usize>(), 1000);
}

#[test]
fn roll_all_without_dice() {
	let rolled = dice::roll_all("hello there, 12 + 5", &mut MaxRoller, 1000).unwrap();
	assert!(rolled.is_empty());
}

proptest! {
	#[test]
	fn rolls_stay_in_range(sides in 1_u32..=1_000_000, count in 1_u32..=64, seed in any::<u64>()) {
		let rolled = FastRandRoller::with_seed(seed).roll(Dice::new("xdy", count, sides));
		prop_assert_eq!(rolled.rolls.len(), count as usize);
		prop_assert!(rolled.rolls.iter().all(|roll| (1..=sides).contains(roll)));
	}
}

fn rolls_in_range(rolls: &[u32], sides: u32) {
	assert!(!rolls.iter().any(|roll| *roll < 1 || *roll > sides));
}
