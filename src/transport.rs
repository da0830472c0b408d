use {
	crate::HttpConfig,
	bytes::Bytes,
	std::{error::Error, sync::Arc},
	url::Url,
};

/// A blocking HTTP client capable of issuing GET requests
///
/// [`IdentityConverter`] is generic over this so tests can substitute the network with a stub.
///
/// [`IdentityConverter`]: crate::IdentityConverter
pub trait HttpGet
{
	/// Transport-level failure, e.g. a refused connection or a timeout.
	type Error: Error + Send + Sync + 'static;

	/// Sends a GET request to `url` and buffers the entire response.
	///
	/// Non-2xx responses are not errors at this level.
	fn get(&self, url: &Url) -> Result<http::Response<Bytes>, Self::Error>;
}

impl<C> HttpGet for &C
where
	C: HttpGet + ?Sized,
{
	type Error = C::Error;

	fn get(&self, url: &Url) -> Result<http::Response<Bytes>, Self::Error>
	{
		C::get(*self, url)
	}
}

impl<C> HttpGet for Arc<C>
where
	C: HttpGet + ?Sized,
{
	type Error = C::Error;

	fn get(&self, url: &Url) -> Result<http::Response<Bytes>, Self::Error>
	{
		C::get(&**self, url)
	}
}

/// [`HttpGet`] implementation backed by [`reqwest`]'s blocking client
///
/// Cloning is cheap; clones share a connection pool.
///
/// Like [`reqwest::blocking::Client`], this must not be created or used from within an async
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient
{
	http_client: reqwest::blocking::Client,
}

/// Error returned by [`ReqwestClient::from_config()`]
#[derive(Debug, Display, Error)]
#[display("failed to build HTTP client")]
pub struct BuildClientError(reqwest::Error);

impl ReqwestClient
{
	/// Builds a client with the timeouts and user agent from `config`.
	pub fn from_config(config: &HttpConfig) -> Result<Self, BuildClientError>
	{
		let mut builder = reqwest::blocking::Client::builder()
			.timeout(config.timeout)
			.connect_timeout(config.connect_timeout);

		if let Some(ref user_agent) = config.user_agent {
			builder = builder.user_agent(&**user_agent);
		}

		if !config.system_proxy {
			builder = builder.no_proxy();
		}

		builder.build().map(Self::from).map_err(BuildClientError)
	}
}

impl From<reqwest::blocking::Client> for ReqwestClient
{
	fn from(http_client: reqwest::blocking::Client) -> Self
	{
		Self { http_client }
	}
}

impl AsRef<reqwest::blocking::Client> for ReqwestClient
{
	fn as_ref(&self) -> &reqwest::blocking::Client
	{
		&self.http_client
	}
}

impl HttpGet for ReqwestClient
{
	type Error = reqwest::Error;

	fn get(&self, url: &Url) -> Result<http::Response<Bytes>, Self::Error>
	{
		let response = self.http_client.get(url.clone()).send()?;
		let status = response.status();
		let headers = response.headers().clone();
		let body = response.bytes()?;

		let mut response = http::Response::new(body);
		*response.status_mut() = status;
		*response.headers_mut() = headers;

		Ok(response)
	}
}
