use {
	crate::steam::VanityResponse,
	bytes::Bytes,
	std::{error::Error as StdError, fmt},
	steam_id::{OutOfRange, ParseAccountNumberError, ParseLegacyTextIdError},
};

/// Error type returned by [`IdentityConverter::resolve_vanity()`]
///
/// Every variant maps to exactly one [`ErrorKind`].
///
/// [`IdentityConverter::resolve_vanity()`]: crate::IdentityConverter::resolve_vanity()
#[derive(Debug, From)]
pub enum Error
{
	Parse(ParseError),
	Network(NetworkError),
	RemoteProtocol(RemoteProtocolError),
}

/// The different kinds of [`Error`]s
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
	#[display("parse error")]
	Parse,

	#[display("network error")]
	Network,

	#[display("remote protocol error")]
	RemoteProtocol,
}

/// Malformed or out-of-range input
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq)]
pub enum ParseError
{
	#[display("{_0}")]
	LegacyTextId(#[error(ignore)] ParseLegacyTextIdError),

	#[display("{_0}")]
	OutOfRange(#[error(ignore)] OutOfRange),

	#[display("{_0}")]
	AccountNumber(#[error(ignore)] ParseAccountNumberError),

	/// No vanity name could be extracted from the given profile URL.
	#[from(ignore)]
	#[display("no vanity name found in {input:?}")]
	MissingVanityName
	{
		input: Box<str>,
	},
}

/// The Steam Web API could not be reached
///
/// The underlying transport error is available through [`Error::source()`].
///
/// [`Error::source()`]: std::error::Error::source()
#[derive(Debug)]
pub struct NetworkError
{
	source: Box<dyn StdError + Send + Sync + 'static>,
}

/// The Steam Web API was reached, but its response was not usable
#[derive(Debug, Display, Error)]
#[display("unexpected response from Steam: {_variant}")]
pub enum RemoteProtocolError
{
	/// Steam responded with a non-2xx status code.
	#[display("HTTP {status}")]
	BadStatus
	{
		status: http::StatusCode,

		#[debug("{:?}", String::from_utf8_lossy(body))]
		body: Bytes,
	},

	/// The response body did not have the expected shape.
	#[display("failed to decode response body")]
	DeserializeResponse
	{
		source: serde_json::Error,

		#[debug("{:?}", String::from_utf8_lossy(body))]
		body: Bytes,
	},

	/// The lookup itself was unsuccessful, e.g. because the vanity name does not exist.
	#[display("lookup failed ({response})")]
	Unsuccessful
	{
		response: VanityResponse,
	},

	/// Steam reported success but did not include a SteamID.
	#[display("missing `steamid` in successful response")]
	MissingSteamId
	{
		response: VanityResponse,
	},
}

impl Error
{
	pub fn kind(&self) -> ErrorKind
	{
		match *self {
			Self::Parse(_) => ErrorKind::Parse,
			Self::Network(_) => ErrorKind::Network,
			Self::RemoteProtocol(_) => ErrorKind::RemoteProtocol,
		}
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match *self {
			Self::Parse(ref error) => fmt::Display::fmt(error, fmt),
			Self::Network(ref error) => fmt::Display::fmt(error, fmt),
			Self::RemoteProtocol(ref error) => fmt::Display::fmt(error, fmt),
		}
	}
}

impl StdError for Error
{
	fn source(&self) -> Option<&(dyn StdError + 'static)>
	{
		match *self {
			Self::Parse(ref error) => error.source(),
			Self::Network(ref error) => error.source(),
			Self::RemoteProtocol(ref error) => error.source(),
		}
	}
}

impl From<OutOfRange> for Error
{
	fn from(error: OutOfRange) -> Self
	{
		Self::Parse(error.into())
	}
}

impl From<ParseAccountNumberError> for Error
{
	fn from(error: ParseAccountNumberError) -> Self
	{
		Self::Parse(error.into())
	}
}

impl NetworkError
{
	pub fn new(source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self
	{
		Self { source: source.into() }
	}

	/// Returns the underlying transport error.
	pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static)
	{
		&*self.source
	}
}

impl fmt::Display for NetworkError
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "failed to reach the Steam Web API: {}", self.source)
	}
}

impl StdError for NetworkError
{
	fn source(&self) -> Option<&(dyn StdError + 'static)>
	{
		Some(&*self.source)
	}
}
