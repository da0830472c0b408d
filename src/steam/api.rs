use {
	crate::{Error, HttpGet, NetworkError, RemoteProtocolError},
	serde::Deserialize,
	std::fmt,
	url::Url,
};

/// Base URL of the public Steam Web API.
pub(crate) const DEFAULT_API_URL: &str = "https://api.steampowered.com";

pub(crate) fn default_api_url() -> Url
{
	DEFAULT_API_URL
		.parse::<Url>()
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}

/// Appends `segments` to the path of `base_url`, preserving any path prefix it already has.
///
/// URLs that cannot be a base (e.g. `mailto:`) are returned unchanged; requests to them will fail
/// in the HTTP client.
pub(crate) fn join_path(base_url: &Url, segments: &[&str]) -> Url
{
	let mut url = base_url.clone();
	url.set_query(None);
	url.set_fragment(None);

	if let Ok(mut path) = url.path_segments_mut() {
		path.pop_if_empty().extend(segments);
	}

	url
}

/// Sends a GET request and decodes the `response` object every Steam Web API response is wrapped
/// in.
#[instrument(level = "debug", skip_all, fields(endpoint = url.path()))]
pub(crate) fn send_request<C, T>(http_client: &C, url: &Url) -> Result<T, Error>
where
	C: HttpGet + ?Sized,
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	#[derive(Debug, serde::Deserialize)]
	struct ApiResponse<T>
	{
		response: T,
	}

	let (response, body) = http_client.get(url).map_err(NetworkError::new)?.into_parts();

	trace!(status = %response.status, body.len = body.len(), "received response");

	if !response.status.is_success() {
		return Err(RemoteProtocolError::BadStatus { status: response.status, body }.into());
	}

	serde_json::from_slice(&body[..])
		.map(|ApiResponse { response }| response)
		.map_err(|err| RemoteProtocolError::DeserializeResponse { source: err, body }.into())
}
