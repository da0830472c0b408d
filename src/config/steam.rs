use {crate::steam::api, serde::Deserialize, url::Url};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SteamConfig
{
	/// Steam WebAPI key.
	///
	/// May be empty, in which case Steam will reject vanity lookups.
	#[debug(skip)]
	pub api_key: Box<str>,

	/// Base URL of the Steam WebAPI.
	#[debug("{:?}", api_url.as_str())]
	#[serde(default = "api::default_api_url")]
	pub api_url: Url,
}

impl Default for SteamConfig
{
	fn default() -> Self
	{
		Self { api_key: Box::default(), api_url: api::default_api_url() }
	}
}
