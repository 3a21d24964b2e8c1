#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

use core::fmt::{Display, Formatter, Result as FmtResult, Write as _};

/// Whether the lowest bit of `n` is clear.
///
/// Works on the two's complement bits, so negative values need no special
/// casing.
#[must_use]
pub const fn is_even(n: i64) -> bool {
	n & 1 == 0
}

/// A boolean shown as `1` or `0`, like a stream without `boolalpha` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct BoolDigit(pub bool);

impl From<bool> for BoolDigit {
	fn from(value: bool) -> Self {
		Self(value)
	}
}

impl Display for BoolDigit {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_char(if self.0 { '1' } else { '0' })
	}
}
