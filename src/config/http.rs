use {
	serde::{Deserialize, Deserializer, de},
	std::time::Duration,
};

/// Settings for the HTTP client used to talk to the Steam WebAPI
///
/// Durations are given in (fractional) seconds.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	/// Total deadline for a single request, including reading the body.
	#[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
	pub timeout: Duration,

	#[serde(default = "default_connect_timeout", deserialize_with = "deserialize_duration")]
	pub connect_timeout: Duration,

	pub user_agent: Option<Box<str>>,

	/// Whether to honor `HTTP_PROXY`, `HTTPS_PROXY` and friends.
	#[serde(default = "default_system_proxy")]
	pub system_proxy: bool,
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			timeout: default_timeout(),
			connect_timeout: default_connect_timeout(),
			user_agent: None,
			system_proxy: default_system_proxy(),
		}
	}
}

fn default_timeout() -> Duration
{
	Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration
{
	Duration::from_secs(10)
}

fn default_system_proxy() -> bool
{
	true
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	let seconds = f64::deserialize(deserializer)?;

	Duration::try_from_secs_f64(seconds)
		.map_err(|err| de::Error::custom(format_args!("invalid duration `{seconds}`: {err}")))
}
