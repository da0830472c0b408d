use std::{fmt, str::FromStr};

use crate::{
	ACCOUNT_UNIVERSE_BASE,
	AccountNumber,
	OutOfRange,
	ParseLegacyTextIdError,
	Steam3Id,
};

/// The legacy `STEAM_0:Y:Z` form of a Steam account identifier
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#As_Represented_Textually>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyTextId
{
	y: u64,
	z: u64,
}

impl LegacyTextId
{
	pub const fn new(y: u64, z: u64) -> Self
	{
		Self { y, z }
	}

	/// Returns the `Y` segment.
	///
	/// This is usually 0 or 1, but parsing does not enforce that.
	pub const fn y(self) -> u64
	{
		self.y
	}

	/// Returns the `Z` segment.
	pub const fn z(self) -> u64
	{
		self.z
	}

	/// Parses a string of the shape `STEAM_0:<Y>:<Z>`.
	///
	/// The input is split on `:` and must produce exactly 3 segments. The first segment is not
	/// inspected; `Y` and `Z` must be unsigned decimal integers that fit into 64 bits.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::LegacyTextId;
	///
	/// let legacy = LegacyTextId::parse("STEAM_0:1:82174").unwrap();
	///
	/// assert_eq!(legacy.y(), 1);
	/// assert_eq!(legacy.z(), 82174);
	/// ```
	pub fn parse(input: &str) -> Result<Self, ParseLegacyTextIdError>
	{
		let segments = input.split(':').collect::<Vec<_>>();

		let [_, y, z] = segments[..] else {
			return Err(ParseLegacyTextIdError::SegmentCount {
				actual: input.into(),
				found: segments.len(),
			});
		};

		let y = crate::parse_segment(y)
			.map_err(|reason| ParseLegacyTextIdError::InvalidY { actual: y.into(), reason })?;

		let z = crate::parse_segment(z)
			.map_err(|reason| ParseLegacyTextIdError::InvalidZ { actual: z.into(), reason })?;

		Ok(Self { y, z })
	}

	/// Converts to the 64-bit form.
	///
	/// `w = z * 2 + base + y`
	pub const fn to_account_number(self) -> Result<AccountNumber, OutOfRange>
	{
		let Some(partial) = self.doubled_z_plus_y() else {
			return Err(self.out_of_range());
		};

		let Some(raw) = partial.checked_add(ACCOUNT_UNIVERSE_BASE) else {
			return Err(self.out_of_range());
		};

		Ok(AccountNumber::new(raw))
	}

	/// Converts to the `[U:1:W]` form.
	///
	/// `w = z * 2 + y`
	///
	/// Unlike [`LegacyTextId::to_account_number()`], the account universe base is not involved
	/// here.
	pub const fn to_steam3(self) -> Result<Steam3Id, OutOfRange>
	{
		match self.doubled_z_plus_y() {
			Some(raw) => Ok(Steam3Id::new(raw)),
			None => Err(self.out_of_range()),
		}
	}

	const fn doubled_z_plus_y(self) -> Option<u64>
	{
		match self.z.checked_mul(2) {
			Some(doubled) => doubled.checked_add(self.y),
			None => None,
		}
	}

	const fn out_of_range(self) -> OutOfRange
	{
		OutOfRange { y: self.y, z: self.z }
	}
}

impl fmt::Display for LegacyTextId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "STEAM_0:{}:{}", self.y, self.z)
	}
}

impl FromStr for LegacyTextId
{
	type Err = ParseLegacyTextIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		Self::parse(value)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::InvalidSegment;

	#[test]
	fn parse_works()
	{
		assert_eq!(LegacyTextId::parse("STEAM_0:1:82174"), Ok(LegacyTextId::new(1, 82174)));
		assert_eq!(LegacyTextId::parse("STEAM_0:0:26448851"), Ok(LegacyTextId::new(0, 26448851)));
	}

	#[test]
	fn parse_ignores_first_segment()
	{
		assert_eq!(LegacyTextId::parse("STEAM_1:1:82174"), Ok(LegacyTextId::new(1, 82174)));
		assert_eq!(LegacyTextId::parse(":1:82174"), Ok(LegacyTextId::new(1, 82174)));
	}

	#[test]
	fn parse_accepts_any_y()
	{
		assert_eq!(LegacyTextId::parse("STEAM_0:7:3"), Ok(LegacyTextId::new(7, 3)));
	}

	#[test]
	fn parse_fails_with_too_few_segments()
	{
		assert_eq!(
			LegacyTextId::parse("STEAM_0:1"),
			Err(ParseLegacyTextIdError::SegmentCount { actual: "STEAM_0:1".into(), found: 2 }),
		);

		assert_eq!(
			LegacyTextId::parse(""),
			Err(ParseLegacyTextIdError::SegmentCount { actual: "".into(), found: 1 }),
		);
	}

	#[test]
	fn parse_fails_with_too_many_segments()
	{
		assert_eq!(
			LegacyTextId::parse("STEAM_0:1:2:3"),
			Err(ParseLegacyTextIdError::SegmentCount { actual: "STEAM_0:1:2:3".into(), found: 4 }),
		);
	}

	#[test]
	fn parse_fails_if_y_is_invalid()
	{
		assert_eq!(
			LegacyTextId::parse("STEAM_0:x:82174"),
			Err(ParseLegacyTextIdError::InvalidY {
				actual: "x".into(),
				reason: InvalidSegment::NotDecimal,
			}),
		);

		assert_eq!(
			LegacyTextId::parse("STEAM_0::82174"),
			Err(ParseLegacyTextIdError::InvalidY { actual: "".into(), reason: InvalidSegment::Empty }),
		);
	}

	#[test]
	fn parse_fails_if_z_is_invalid()
	{
		assert_eq!(
			LegacyTextId::parse("STEAM_0:1:-5"),
			Err(ParseLegacyTextIdError::InvalidZ {
				actual: "-5".into(),
				reason: InvalidSegment::NotDecimal,
			}),
		);

		assert_eq!(
			LegacyTextId::parse("STEAM_0:1:99999999999999999999"),
			Err(ParseLegacyTextIdError::InvalidZ {
				actual: "99999999999999999999".into(),
				reason: InvalidSegment::TooLarge,
			}),
		);
	}

	#[test]
	fn to_account_number_works()
	{
		let cases = [
			(LegacyTextId::new(1, 82174), 76561197960430077_u64),
			(LegacyTextId::new(0, 26448851), 76561198013163430_u64),
			(LegacyTextId::new(1, 2912), 76561197960271553_u64),
			(LegacyTextId::new(1, 2273581), 76561197964812891_u64),
		];

		for (legacy, expected) in cases {
			assert_eq!(legacy.to_account_number(), Ok(AccountNumber::new(expected)), "{legacy}");
		}
	}

	#[test]
	fn to_account_number_fails_on_overflow()
	{
		let legacy = LegacyTextId::new(0, u64::MAX / 2);

		assert_eq!(legacy.to_account_number(), Err(OutOfRange { y: 0, z: u64::MAX / 2 }));
		assert_eq!(
			LegacyTextId::new(u64::MAX, 0).to_account_number(),
			Err(OutOfRange { y: u64::MAX, z: 0 }),
		);
		assert_eq!(
			LegacyTextId::new(0, u64::MAX / 2 + 1).to_account_number(),
			Err(OutOfRange { y: 0, z: u64::MAX / 2 + 1 }),
		);
	}

	#[test]
	fn to_steam3_works()
	{
		let cases = [
			(LegacyTextId::new(1, 82174), "[U:1:164349]"),
			(LegacyTextId::new(0, 26448851), "[U:1:52897702]"),
			(LegacyTextId::new(1, 2912), "[U:1:5825]"),
			(LegacyTextId::new(1, 2273581), "[U:1:4547163]"),
		];

		for (legacy, expected) in cases {
			assert_eq!(legacy.to_steam3().map(|id| id.to_string()).as_deref(), Ok(expected));
		}
	}

	#[test]
	fn to_steam3_fails_on_overflow()
	{
		assert_eq!(
			LegacyTextId::new(1, u64::MAX / 2).to_steam3(),
			Ok(Steam3Id::new(u64::MAX)),
		);

		assert_eq!(
			LegacyTextId::new(2, u64::MAX / 2).to_steam3(),
			Err(OutOfRange { y: 2, z: u64::MAX / 2 }),
		);
	}

	#[test]
	fn display_works()
	{
		assert_eq!(LegacyTextId::new(1, 82174).to_string(), "STEAM_0:1:82174");
	}
}
