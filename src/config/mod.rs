mod http;
mod steam;

use {
	serde::Deserialize,
	std::{fs, io, path::Path},
};

pub use self::{http::HttpConfig, steam::SteamConfig};

/// Top-level configuration, usually loaded from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub steam: SteamConfig,
	pub http: HttpConfig,
}

/// Error returned by [`Config::load_from_file()`]
#[derive(Debug, Display, Error)]
pub enum LoadConfigError
{
	#[display("failed to read configuration file at {path:?}")]
	ReadFile
	{
		path: Box<Path>,
		source: io::Error,
	},

	#[display("failed to parse configuration file at {path:?}")]
	ParseFile
	{
		path: Box<Path>,
		source: toml::de::Error,
	},
}

impl Config
{
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadConfigError>
	{
		let path = path.as_ref();
		let file = fs::read_to_string(path)
			.map_err(|err| LoadConfigError::ReadFile { path: path.into(), source: err })?;

		toml::from_str(&file)
			.map_err(|err| LoadConfigError::ParseFile { path: path.into(), source: err })
	}
}
