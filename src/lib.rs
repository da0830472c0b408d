#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, Error, From)]
extern crate derive_more as _;

#[macro_use]
extern crate tracing as _;

pub use steam_id::{ACCOUNT_UNIVERSE_BASE, AccountNumber, LegacyTextId, Steam3Id};

pub use self::{
	config::{Config, HttpConfig, LoadConfigError, SteamConfig},
	converter::IdentityConverter,
	error::{Error, ErrorKind, NetworkError, ParseError, RemoteProtocolError},
	steam::VanityResponse,
	transport::{BuildClientError, HttpGet, ReqwestClient},
};

mod config;
mod converter;
mod error;
mod steam;
mod transport;
