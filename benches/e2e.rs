#![feature(test)]

extern crate test;

use test::Bencher;

use saikoro::{config::Config, dice::roller::FastRand, resolve_with};

#[bench]
fn e2e_basic(b: &mut Bencher) {
	let config = Config::default();
	let mut rng = FastRand::default();
	b.iter(|| resolve_with("4d8 + 4", &mut rng, &config).unwrap().unwrap());
}

#[bench]
fn e2e_complex(b: &mut Bencher) {
	let config = Config::default();
	let mut rng = FastRand::default();
	b.iter(|| {
		resolve_with("4d8 + 2d10 * (-3d6 - 6 / 2) >= d20", &mut rng, &config)
			.unwrap()
			.unwrap()
			.reply(&config.labels)
	});
}

#[bench]
fn e2e_chatter(b: &mut Bencher) {
	let config = Config::default();
	let mut rng = FastRand::default();
	b.iter(|| resolve_with("rolling d20 for initiative, wish me luck", &mut rng, &config).is_err());
}
