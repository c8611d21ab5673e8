use std::{
	io::{self, BufRead},
	process::ExitCode,
};

use ariadne::{Color, IndexType, Label, Report, ReportKind, Source};
use clap::Parser;
use saikoro::{
	config::Config,
	dice::roller::{FastRand as FastRandRoller, Roller},
	resolve::Error,
	resolve_with,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Rolls the dice in chat messages and prints the replies.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Message to resolve. All words are joined with spaces, so it can be left unquoted.
	/// When absent, every line of stdin is resolved as a separate message.
	message: Vec<String>,

	/// Seed for the dice roller, for repeatable rolls
	#[arg(long)]
	seed: Option<u64>,

	/// Most dice a single message may roll (overrides SAIKORO_MAX_DICE)
	#[arg(long)]
	max_dice: Option<u32>,

	/// Explain why messages with dice produced no reply, on stderr
	#[arg(long)]
	explain: bool,

	/// Log more; repeat for even more
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_logging(args.verbose);

	let mut config = match Config::from_env() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Configuration error: {err}");
			return ExitCode::FAILURE;
		}
	};
	if let Some(max_dice) = args.max_dice {
		config = config.max_dice(max_dice);
	}

	let mut roller = args.seed.map_or_else(FastRandRoller::default, FastRandRoller::with_seed);

	if !args.message.is_empty() {
		handle(&args.message.join(" "), &mut roller, &config, args.explain);
		return ExitCode::SUCCESS;
	}

	for line in io::stdin().lock().lines() {
		match line {
			Ok(line) => handle(&line, &mut roller, &config, args.explain),
			Err(err) => {
				eprintln!("Failed to read stdin: {err}");
				return ExitCode::FAILURE;
			}
		}
	}

	ExitCode::SUCCESS
}

/// Resolves a single message, printing its reply if it has one.
fn handle(message: &str, roller: &mut impl Roller, config: &Config, explain: bool) {
	match resolve_with(message, roller, config) {
		Ok(Some(resolution)) => {
			debug!(text = message, "resolved");
			println!("{}", resolution.reply(&config.labels));
		}
		Ok(None) => {}
		Err(err) => {
			info!(text = message, %err, "message with dice was not resolved");
			if explain {
				explain_error(message, &err);
			}
		}
	}
}

/// Writes a description of why a message could not be resolved to stderr.
fn explain_error(message: &str, err: &Error) {
	let Error::Parse { calculate, source } = err else {
		eprintln!("{message}: {err}");
		return;
	};

	for detail in &source.details {
		let report = Report::build(ReportKind::Error, ("calculation", detail.span.clone()))
			.with_config(ariadne::Config::default().with_index_type(IndexType::Byte))
			.with_message("Calculation didn't parse")
			.with_label(
				Label::new(("calculation", detail.span.clone()))
					.with_message(&detail.message)
					.with_color(Color::Red),
			)
			.finish();
		if let Err(io_err) = report.eprint(("calculation", Source::from(calculate))) {
			eprintln!("Failed to write report: {io_err}");
		}
	}
}

/// Sets up the log output, preferring `RUST_LOG` when it is set.
fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("saikoro={level}")));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
