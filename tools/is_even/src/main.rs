mod args;

use std::io::{self, BufRead, Write};

use clap::Parser as _;
use color_eyre::Result;
use drills_io::{Prompt, install_tracing};
use drills_parity::{BoolDigit, is_even};
use tracing::{debug, instrument};

use self::args::Args;

const PROMPT: Prompt<'static> = Prompt::new("enter an int: ");

fn main() -> Result<()> {
	install_tracing();
	color_eyre::install()?;

	if let Err(e) = Args::try_parse() {
		eprintln!("{e}");
		return Ok(());
	}

	run(io::stdin().lock(), io::stdout().lock())
}

#[instrument(level = "debug", skip_all)]
fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
	let n = PROMPT.ask::<i64>(input, &mut output)?;
	let even = is_even(n);

	debug!(n, even);

	writeln!(output, "{}", BoolDigit(even))?;
	output.flush()?;

	Ok(())
}
