use {
	crate::{BuildClientError, Config, Error, HttpGet, ParseError, ReqwestClient, steam},
	std::sync::Arc,
	steam_id::{AccountNumber, LegacyTextId, Steam3Id},
	url::Url,
};

/// Converts between the different representations of a Steam account identifier
///
/// All conversions except [`resolve_vanity()`] are pure functions. [`resolve_vanity()`] makes a
/// single blocking GET request to the Steam Web API through the `C` client; deadlines are whatever
/// that client is configured with, and nothing is ever retried or cached.
///
/// The converter is immutable after construction and can be shared between threads freely.
///
/// [`resolve_vanity()`]: IdentityConverter::resolve_vanity()
#[derive(Debug, Clone)]
pub struct IdentityConverter<C = ReqwestClient>
{
	#[debug(skip)]
	api_key: Arc<str>,

	/// The `ResolveVanityURL` endpoint, without query parameters.
	#[debug("{:?}", endpoint.as_str())]
	endpoint: Url,

	http_client: C,
}

impl IdentityConverter
{
	/// Creates a converter backed by a [`ReqwestClient`] built from `config`.
	pub fn from_config(config: &Config) -> Result<Self, BuildClientError>
	{
		let http_client = ReqwestClient::from_config(&config.http)?;

		Ok(Self::with_api_url(&*config.steam.api_key, &config.steam.api_url, http_client))
	}
}

impl<C> IdentityConverter<C>
{
	/// Creates a converter talking to the public Steam Web API.
	///
	/// `api_key` may be empty; Steam will then reject vanity lookups.
	pub fn new(api_key: impl Into<Arc<str>>, http_client: C) -> Self
	{
		Self::with_api_url(api_key, &steam::api::default_api_url(), http_client)
	}

	/// Creates a converter talking to the Steam Web API at `api_url`.
	pub fn with_api_url(api_key: impl Into<Arc<str>>, api_url: &Url, http_client: C) -> Self
	{
		Self { api_key: api_key.into(), endpoint: steam::vanity_endpoint(api_url), http_client }
	}

	pub fn http_client(&self) -> &C
	{
		&self.http_client
	}

	/// Converts a SteamID64 to the `STEAM_0:Y:Z` form.
	///
	/// `account_number` must not be less than [`ACCOUNT_UNIVERSE_BASE`]; the result is
	/// unspecified otherwise.
	///
	/// [`ACCOUNT_UNIVERSE_BASE`]: crate::ACCOUNT_UNIVERSE_BASE
	pub fn to_legacy_text(&self, account_number: AccountNumber) -> LegacyTextId
	{
		account_number.to_legacy_text()
	}

	/// Converts a `STEAM_0:Y:Z` string to a SteamID64.
	pub fn to_account_number(&self, legacy_text_id: &str) -> Result<AccountNumber, ParseError>
	{
		let legacy_text_id = LegacyTextId::parse(legacy_text_id)?;

		Ok(legacy_text_id.to_account_number()?)
	}

	/// Converts a `STEAM_0:Y:Z` string to the `[U:1:W]` form.
	pub fn to_steam3(&self, legacy_text_id: &str) -> Result<Steam3Id, ParseError>
	{
		let legacy_text_id = LegacyTextId::parse(legacy_text_id)?;

		Ok(legacy_text_id.to_steam3()?)
	}
}

impl<C> IdentityConverter<C>
where
	C: HttpGet,
{
	/// Resolves a vanity profile URL such as `https://steamcommunity.com/id/<name>/` to a
	/// SteamID64.
	///
	/// The vanity name is the last non-empty path segment of `vanity_url`.
	pub fn resolve_vanity(&self, vanity_url: &str) -> Result<AccountNumber, Error>
	{
		steam::resolve_vanity(&self.http_client, &self.endpoint, &self.api_key, vanity_url)
	}
}
