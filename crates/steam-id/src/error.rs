/// Why a numeric segment of a textual ID could not be parsed
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSegment
{
	#[display("segment is empty")]
	Empty,

	#[display("segment is not an unsigned decimal integer")]
	NotDecimal,

	#[display("segment does not fit into 64 bits")]
	TooLarge,
}

/// Error type for conversions from strings to [`AccountNumber`]
///
/// [`AccountNumber`]: crate::AccountNumber
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid SteamID64 {actual:?}: {reason}")]
pub struct ParseAccountNumberError
{
	/// The input that failed to parse.
	pub actual: Box<str>,

	pub reason: InvalidSegment,
}

/// Error type for parsing `STEAM_0:Y:Z` strings
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("failed to parse legacy SteamID: {_variant}")]
pub enum ParseLegacyTextIdError
{
	/// The input did not consist of exactly 3 `:`-separated segments.
	#[display("expected 3 `:`-separated segments but found {found} in {actual:?}")]
	SegmentCount
	{
		actual: Box<str>,
		found: usize,
	},

	#[display("invalid `Y` segment {actual:?}: {reason}")]
	InvalidY
	{
		actual: Box<str>,
		reason: InvalidSegment,
	},

	#[display("invalid `Z` segment {actual:?}: {reason}")]
	InvalidZ
	{
		actual: Box<str>,
		reason: InvalidSegment,
	},
}

/// Error type for parsing `[U:1:W]` strings
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("failed to parse Steam3 ID: {_variant}")]
pub enum ParseSteam3IdError
{
	/// The input was not of the shape `[U:1:<W>]`.
	#[display("expected `[U:1:<W>]` but got {actual:?}")]
	Malformed
	{
		actual: Box<str>,
	},

	#[display("invalid `W` segment {actual:?}: {reason}")]
	InvalidW
	{
		actual: Box<str>,
		reason: InvalidSegment,
	},
}

/// A `STEAM_0:Y:Z` value whose numeric form does not fit into 64 bits
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("`STEAM_0:{y}:{z}` is out of range for a 64-bit SteamID")]
pub struct OutOfRange
{
	pub y: u64,
	pub z: u64,
}
