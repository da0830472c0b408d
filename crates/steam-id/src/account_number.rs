use std::{fmt, str::FromStr};

use crate::{ACCOUNT_UNIVERSE_BASE, LegacyTextId, ParseAccountNumberError};

/// The 64-bit form of a Steam account identifier, also known as "SteamID64".
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct AccountNumber(u64);

impl AccountNumber
{
	/// Wraps a raw 64-bit integer.
	///
	/// No validation happens here; see [`AccountNumber::is_individual()`].
	pub const fn new(value: u64) -> Self
	{
		Self(value)
	}

	/// Returns the raw integer value.
	pub const fn as_u64(self) -> u64
	{
		self.0
	}

	/// Returns whether this value is at or above [`ACCOUNT_UNIVERSE_BASE`].
	pub const fn is_individual(self) -> bool
	{
		self.0 >= ACCOUNT_UNIVERSE_BASE
	}

	/// Returns the `Y` bit of the `STEAM_0:Y:Z` form.
	pub const fn y(self) -> u64
	{
		self.0 % 2
	}

	/// Converts to the `STEAM_0:Y:Z` form.
	///
	/// `y = w mod 2` and `z = (w - y - base) / 2`.
	///
	/// The result is unspecified if this value is below [`ACCOUNT_UNIVERSE_BASE`]; the subtraction
	/// wraps around instead of panicking. Use [`AccountNumber::try_to_legacy_text()`] if the
	/// input is untrusted.
	pub const fn to_legacy_text(self) -> LegacyTextId
	{
		debug_assert!(self.is_individual(), "SteamID64 is below the account universe base");

		let y = self.y();
		let z = self.0.wrapping_sub(y).wrapping_sub(ACCOUNT_UNIVERSE_BASE) / 2;

		LegacyTextId::new(y, z)
	}

	/// Converts to the `STEAM_0:Y:Z` form, returning [`None`] if this value is below
	/// [`ACCOUNT_UNIVERSE_BASE`].
	pub const fn try_to_legacy_text(self) -> Option<LegacyTextId>
	{
		let y = self.y();

		match self.0.checked_sub(y + ACCOUNT_UNIVERSE_BASE) {
			Some(doubled) => Some(LegacyTextId::new(y, doubled / 2)),
			None => None,
		}
	}
}

impl fmt::Display for AccountNumber
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl FromStr for AccountNumber
{
	type Err = ParseAccountNumberError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		crate::parse_segment(value)
			.map(Self)
			.map_err(|reason| ParseAccountNumberError { actual: value.into(), reason })
	}
}
