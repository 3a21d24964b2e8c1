use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	io::{self, BufRead, Write},
};

use tracing::{debug, trace};

use super::Lenient;

/// A question printed before reading a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Prompt<'a> {
	text: &'a str,
}

impl<'a> Prompt<'a> {
	#[must_use]
	pub const fn new(text: &'a str) -> Self {
		Self { text }
	}

	/// Writes the prompt as is, then reads the first whitespace separated
	/// token from `reader`, skipping blank lines.
	///
	/// Missing or malformed input is not an error, it converts through
	/// [`Lenient`]. Only failing I/O is reported.
	pub fn ask<T: Lenient>(
		self,
		reader: impl BufRead,
		mut writer: impl Write,
	) -> Result<T, PromptError> {
		writer
			.write_all(self.text.as_bytes())
			.and_then(|()| writer.flush())
			.map_err(PromptError::Write)?;

		let Some(token) = read_token(reader).map_err(PromptError::Read)? else {
			debug!(prompt = self.text, "input ended before a value, using zero");
			return Ok(T::default());
		};

		trace!(%token, "read token");

		Ok(T::from_token(&token))
	}
}

fn read_token(mut reader: impl BufRead) -> io::Result<Option<String>> {
	let mut line = Vec::new();

	loop {
		line.clear();

		if reader.read_until(b'\n', &mut line)? == 0 {
			return Ok(None);
		}

		if let Some(token) = String::from_utf8_lossy(&line).split_whitespace().next() {
			return Ok(Some(token.to_owned()));
		}
	}
}

#[derive(Debug)]
pub enum PromptError {
	Write(io::Error),
	Read(io::Error),
}

impl Display for PromptError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Write(..) => f.write_str("failed to show the prompt"),
			Self::Read(..) => f.write_str("failed to read input"),
		}
	}
}

impl StdError for PromptError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Self::Write(e) | Self::Read(e) => Some(e),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::{self, BufReader, Read};

	use super::{Prompt, PromptError};

	struct Broken;

	impl Read for Broken {
		fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
			Err(io::ErrorKind::BrokenPipe.into())
		}
	}

	impl io::Write for Broken {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::ErrorKind::BrokenPipe.into())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn writes_prompt_without_newline() -> Result<(), PromptError> {
		let mut output = Vec::new();

		let value = Prompt::new("tower h: ").ask::<f64>(&b"100\n"[..], &mut output)?;

		assert_eq!(value, 100.0);
		assert_eq!(output, b"tower h: ");

		Ok(())
	}

	#[test]
	fn skips_blank_lines_and_extra_tokens() -> Result<(), PromptError> {
		let value = Prompt::new("").ask::<i64>(&b"\n  \n\t-8 17\n"[..], io::sink())?;

		assert_eq!(value, -8);

		Ok(())
	}

	#[test]
	fn empty_input_is_zero() -> Result<(), PromptError> {
		assert_eq!(Prompt::new("").ask::<i64>(&b""[..], io::sink())?, 0);
		assert_eq!(Prompt::new("").ask::<f64>(&b"\n\n"[..], io::sink())?, 0.0);

		Ok(())
	}

	#[test]
	fn invalid_utf8_is_zero() -> Result<(), PromptError> {
		assert_eq!(Prompt::new("").ask::<i64>(&b"\xff\xfe\n"[..], io::sink())?, 0);

		Ok(())
	}

	#[test]
	fn io_failures_are_reported() {
		let read = Prompt::new("").ask::<i64>(BufReader::new(Broken), io::sink());
		assert!(matches!(read, Err(PromptError::Read(..))));

		let write = Prompt::new("? ").ask::<i64>(&b"1\n"[..], Broken);
		assert!(matches!(write, Err(PromptError::Write(..))));
	}
}
