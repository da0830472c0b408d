#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, From, Into, Error)]
extern crate derive_more as _;

pub use self::{
	account_number::AccountNumber,
	error::{
		InvalidSegment,
		OutOfRange,
		ParseAccountNumberError,
		ParseLegacyTextIdError,
		ParseSteam3IdError,
	},
	legacy_text_id::LegacyTextId,
	steam3_id::Steam3Id,
};

mod account_number;
mod error;
mod legacy_text_id;
mod steam3_id;

/// Offset between the 64-bit form of an individual account and its `STEAM_0:Y:Z` form.
///
/// Every valid [`AccountNumber`] is at least this large.
pub const ACCOUNT_UNIVERSE_BASE: u64 = 76_561_197_960_265_728_u64;

/// Parses a single decimal segment of a textual ID.
///
/// Only ASCII digits are accepted, so signs like `+1` or `-1` are rejected.
fn parse_segment(segment: &str) -> Result<u64, InvalidSegment>
{
	if segment.is_empty() {
		return Err(InvalidSegment::Empty);
	}

	if !segment.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(InvalidSegment::NotDecimal);
	}

	segment.parse::<u64>().map_err(|_| InvalidSegment::TooLarge)
}
