mod args;

use std::io::{self, BufRead, Write};

use clap::Parser as _;
use color_eyre::Result;
use drills_freefall::reports;
use drills_io::{Prompt, install_tracing};
use tracing::{debug, instrument};

use self::args::Args;

const PROMPT: Prompt<'static> = Prompt::new("tower h: ");

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
	let tower = PROMPT.ask::<f64>(input, &mut output)?;

	debug!(tower, "got tower height");

	for report in reports(tower) {
		writeln!(output, "{report}")?;
	}

	output.flush()?;

	Ok(())
}
