use std::{fmt, str::FromStr};

use crate::ParseSteam3IdError;

/// The bracketed `[U:1:W]` form of a Steam account identifier
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Steam_ID_as_a_Steam_Community_ID>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Steam3Id(u64);

impl Steam3Id
{
	pub const fn new(w: u64) -> Self
	{
		Self(w)
	}

	/// Returns the `W` segment.
	pub const fn w(self) -> u64
	{
		self.0
	}
}

impl fmt::Display for Steam3Id
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "[U:1:{}]", self.0)
	}
}

impl FromStr for Steam3Id
{
	type Err = ParseSteam3IdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		let w = value
			.strip_prefix("[U:1:")
			.and_then(|rest| rest.strip_suffix(']'))
			.ok_or_else(|| ParseSteam3IdError::Malformed { actual: value.into() })?;

		crate::parse_segment(w)
			.map(Self)
			.map_err(|reason| ParseSteam3IdError::InvalidW { actual: w.into(), reason })
	}
}
