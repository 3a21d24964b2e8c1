use std::num::IntErrorKind;

use tracing::debug;

/// Conversion from a raw input token that never fails.
///
/// Mirrors formatted stream extraction: the numeric prefix of the token is
/// scanned once and converted, out of range values saturate, and a token
/// with no well formed numeric prefix becomes zero.
pub trait Lenient: Default {
	fn from_token(token: &str) -> Self;
}

impl Lenient for f64 {
	fn from_token(token: &str) -> Self {
		let parsed = float_prefix(token)
			.and_then(|prefix| prefix.parse::<Self>().ok())
			.map(|value| {
				if value.is_infinite() {
					Self::MAX.copysign(value)
				} else {
					value
				}
			});

		parsed.unwrap_or_else(|| {
			debug!(token, "no number in token, using zero");
			Self::default()
		})
	}
}

impl Lenient for i64 {
	fn from_token(token: &str) -> Self {
		let parsed = integer_prefix(token).and_then(|prefix| match prefix.parse::<Self>() {
			Ok(value) => Some(value),
			Err(e) => match e.kind() {
				IntErrorKind::PosOverflow => Some(Self::MAX),
				IntErrorKind::NegOverflow => Some(Self::MIN),
				_ => None,
			},
		});

		parsed.unwrap_or_else(|| {
			debug!(token, "no integer in token, using zero");
			Self::default()
		})
	}
}

/// `[sign] digits`
fn integer_prefix(token: &str) -> Option<&str> {
	let bytes = token.as_bytes();
	let sign = sign_len(bytes);
	let digits = digit_run(&bytes[sign..]);

	(digits > 0).then(|| &token[..sign + digits])
}

/// `[sign] digits [. digits] [e [sign] digits]`, with at least one mantissa
/// digit. An exponent marker without digits rejects the whole token.
fn float_prefix(token: &str) -> Option<&str> {
	let bytes = token.as_bytes();
	let mut end = sign_len(bytes);

	let int_digits = digit_run(&bytes[end..]);
	end += int_digits;

	let mut frac_digits = 0;
	if bytes.get(end) == Some(&b'.') {
		frac_digits = digit_run(&bytes[end + 1..]);
		end += 1 + frac_digits;
	}

	if int_digits + frac_digits == 0 {
		return None;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let exp_start = end + 1 + sign_len(&bytes[end + 1..]);
		let exp_digits = digit_run(&bytes[exp_start..]);

		if exp_digits == 0 {
			return None;
		}

		end = exp_start + exp_digits;
	}

	Some(&token[..end])
}

fn sign_len(bytes: &[u8]) -> usize {
	usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
