use std::fmt::{Display, Error as FmtError, Formatter, Result as FmtResult};

const PRECISION: i32 = 6;

/// Formats a float with six significant digits, the way a default output
/// stream would (`%g`).
///
/// Fixed notation is used while the decimal exponent is in `-4..6`,
/// scientific notation (`1.5e+07`) otherwise. Trailing fractional zeros are
/// dropped in both forms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Significant(pub f64);

impl Display for Significant {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let value = self.0;

		if value.is_nan() {
			return f.write_str("nan");
		}

		if value.is_infinite() {
			return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
		}

		// the exponent has to be taken after rounding, 999999.5 is 1e+06
		let scientific = format!("{value:.prec$e}", prec = (PRECISION - 1) as usize);
		let (mantissa, exponent) = scientific.split_once('e').ok_or(FmtError)?;
		let exponent = exponent.parse::<i32>().map_err(|_| FmtError)?;

		if (-4..PRECISION).contains(&exponent) {
			let decimals = (PRECISION - 1 - exponent) as usize;
			let fixed = format!("{value:.decimals$}");

			f.write_str(trim_fraction(&fixed))
		} else {
			f.write_str(trim_fraction(mantissa))?;
			f.write_str(if exponent < 0 { "e-" } else { "e+" })?;
			write!(f, "{:02}", exponent.unsigned_abs())
		}
	}
}

fn trim_fraction(digits: &str) -> &str {
	if digits.contains('.') {
		digits.trim_end_matches('0').trim_end_matches('.')
	} else {
		digits
	}
}
