#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

use std::fmt::{Display, Formatter, Result as FmtResult};

use drills_io::Significant;
use tracing::trace;

/// Gravitational acceleration, in meters per second squared.
pub const GRAVITY: f64 = 9.8;

/// The points in time, in seconds, a tower report is printed for.
pub const FALL_SECONDS: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Distance covered by an object dropped from rest after `seconds`.
#[must_use]
pub const fn height_fallen(seconds: f64) -> f64 {
	GRAVITY * seconds * seconds / 2.0
}

/// Height left above the ground after falling from `tower` for `seconds`.
///
/// Not clamped, a negative value means the object would be below ground.
#[must_use]
pub const fn height_after(tower: f64, seconds: f64) -> f64 {
	tower - height_fallen(seconds)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightReport {
	pub seconds: f64,
	pub height: f64,
}

impl HeightReport {
	#[must_use]
	pub fn new(tower: f64, seconds: f64) -> Self {
		let height = height_after(tower, seconds);

		trace!(tower, seconds, height, "computed remaining height");

		Self { seconds, height }
	}
}

impl Display for HeightReport {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str("after ")?;
		Display::fmt(&Significant(self.seconds), f)?;
		f.write_str(" seconds: ")?;
		Display::fmt(&Significant(self.height), f)
	}
}

/// One report per entry of [`FALL_SECONDS`], in order.
pub fn reports(tower: f64) -> impl Iterator<Item = HeightReport> {
	FALL_SECONDS
		.into_iter()
		.map(move |seconds| HeightReport::new(tower, seconds))
}

#[cfg(test)]
mod tests {
	use super::{FALL_SECONDS, HeightReport, height_after, height_fallen, reports};

	const TOWERS: [f64; 6] = [0.0, 1.0, 100.0, 122.5, -3.25, 1e9];

	#[test]
	fn nothing_has_fallen_at_the_start() {
		assert_eq!(height_fallen(0.0), 0.0);

		for tower in TOWERS {
			assert_eq!(height_after(tower, 0.0), tower);
		}
	}

	#[test]
	fn five_seconds_is_exact() {
		assert_eq!(height_fallen(5.0), 122.5);

		for tower in TOWERS {
			assert_eq!(height_after(tower, 5.0), tower - 122.5);
		}
	}

	#[test]
	fn follows_half_g_t_squared() {
		for tower in TOWERS {
			for seconds in FALL_SECONDS {
				let expected = tower - 4.9 * seconds * seconds;
				let actual = height_after(tower, seconds);

				assert!(
					(actual - expected).abs() <= 1e-9 * tower.abs().max(1.0),
					"{tower} after {seconds}s: {actual} != {expected}"
				);
			}
		}
	}

	#[test]
	fn reports_every_second_in_order() {
		let seconds = reports(100.0).map(|r| r.seconds).collect::<Vec<_>>();

		assert_eq!(seconds, FALL_SECONDS);
	}

	#[test]
	fn report_lines() {
		let lines = reports(100.0).map(|r| r.to_string()).collect::<Vec<_>>();

		assert_eq!(
			lines,
			[
				"after 0 seconds: 100",
				"after 1 seconds: 95.1",
				"after 2 seconds: 80.4",
				"after 3 seconds: 55.9",
				"after 4 seconds: 21.6",
				"after 5 seconds: -22.5",
			]
		);
	}

	#[test]
	fn below_ground_is_not_clamped() {
		let report = HeightReport::new(0.0, 1.0);

		assert!(report.height < 0.0);
		assert_eq!(report.to_string(), "after 1 seconds: -4.9");
	}
}
