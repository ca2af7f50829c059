use gloo_net::http::Request;
use voto_waitlist_shared::submission::{TransportError, WaitlistTransport};
use web_sys::RequestMode;

/// Sends signup requests with the browser's fetch API.
///
/// The body goes out as plain text rather than with a JSON content type so the cross-origin request stays simple and
/// skips the preflight.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl WaitlistTransport for FetchTransport {
	async fn post(&self, url: &str, body: String) -> Result<u16, TransportError> {
		let request = Request::post(url)
			.mode(RequestMode::Cors)
			.body(body)
			.map_err(TransportError::new)?;
		let response = request.send().await.map_err(TransportError::new)?;
		Ok(response.status())
	}
}
