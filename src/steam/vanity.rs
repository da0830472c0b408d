use {
	super::api,
	crate::{AccountNumber, Error, HttpGet, ParseError, RemoteProtocolError},
	percent_encoding::percent_decode_str,
	serde::Deserialize,
	std::fmt,
	url::Url,
};

/// Path segments of the `ResolveVanityURL` endpoint, relative to the API base URL.
const PATH: &[&str] = &["ISteamUser", "ResolveVanityURL", "v0001", ""];

/// The `response` object returned by `ISteamUser/ResolveVanityURL`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VanityResponse
{
	/// `1` on success; Steam uses `42` for "no match".
	pub success: i64,

	/// The resolved SteamID64, as a decimal string.
	#[serde(default)]
	pub steamid: Option<Box<str>>,

	/// Human-readable reason for a failed lookup.
	#[serde(default)]
	pub message: Option<Box<str>>,
}

impl fmt::Display for VanityResponse
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "success = {}", self.success)?;

		if let Some(ref message) = self.message {
			write!(fmt, ", message = {message:?}")?;
		}

		Ok(())
	}
}

/// Returns the URL of the `ResolveVanityURL` endpoint for the given API base URL.
pub(crate) fn endpoint(api_url: &Url) -> Url
{
	api::join_path(api_url, PATH)
}

/// Extracts the vanity name from a profile URL like `https://steamcommunity.com/id/<name>/`.
///
/// This is the last non-empty path segment, so the trailing slash is optional. Inputs that are not
/// absolute `http(s)` URLs are split on `/` directly. The name is percent-decoded, since it will be
/// encoded again as a query parameter.
pub(crate) fn extract_vanity_name(vanity_url: &str) -> Option<Box<str>>
{
	match Url::parse(vanity_url) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => {
			last_path_segment(url.path()).map(decode_segment)
		},
		_ => {
			let path = vanity_url.split(['?', '#']).next().unwrap_or(vanity_url);

			last_path_segment(path).map(decode_segment)
		},
	}
}

fn last_path_segment(path: &str) -> Option<&str>
{
	path.split('/').rfind(|segment| !segment.is_empty())
}

fn decode_segment(segment: &str) -> Box<str>
{
	percent_decode_str(segment).decode_utf8_lossy().into()
}

/// Resolves a vanity profile URL to a SteamID64 through the Steam Web API.
#[instrument(level = "debug", skip(http_client, endpoint, api_key))]
pub(crate) fn resolve<C>(
	http_client: &C,
	endpoint: &Url,
	api_key: &str,
	vanity_url: &str,
) -> Result<AccountNumber, Error>
where
	C: HttpGet + ?Sized,
{
	let vanity_name = extract_vanity_name(vanity_url)
		.ok_or_else(|| ParseError::MissingVanityName { input: vanity_url.into() })?;

	let mut url = endpoint.clone();
	url.query_pairs_mut()
		.append_pair("key", api_key)
		.append_pair("vanityurl", &vanity_name);

	debug!(%vanity_name, "resolving vanity URL");

	let response = api::send_request::<C, VanityResponse>(http_client, &url)?;

	if response.success != 1 {
		return Err(RemoteProtocolError::Unsuccessful { response }.into());
	}

	match response.steamid.as_deref().map(str::parse::<AccountNumber>) {
		Some(Ok(account_number)) => Ok(account_number),
		Some(Err(error)) => Err(error.into()),
		None => Err(RemoteProtocolError::MissingSteamId { response }.into()),
	}
}
