use crate::{error::js_message, LoadError};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Fetches the navigation fragment at `url`, bypassing the HTTP cache.
///
/// # Errors
///
/// - [`LoadError::Network`] if the request is rejected outright,
/// - [`LoadError::Status`] for any response that isn't [***ok***](https://developer.mozilla.org/en-US/docs/Web/API/Response/ok),
/// - [`LoadError::Body`] if the body can't be read as text.
#[instrument]
pub async fn fetch_fragment(url: &str) -> Result<String, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;

	let init = RequestInit::new();
	init.set_method("GET");
	init.set_cache(RequestCache::NoStore);
	let request = Request::new_with_str_and_init(url, &init).map_err(|error| LoadError::Request {
		url: url.to_owned(),
		message: js_message(&error),
	})?;

	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|error| LoadError::Network(js_message(&error)))?;
	let response: Response = response.dyn_into().map_err(|value| LoadError::Network(format!("expected a `Response` but received {:?}", value)))?;

	if !response.ok() {
		return Err(LoadError::Status {
			status: response.status(),
			status_text: response.status_text(),
		});
	}

	let text = response.text().map_err(|error| LoadError::Body(js_message(&error)))?;
	let text = JsFuture::from(text).await.map_err(|error| LoadError::Body(js_message(&error)))?;
	let text = text.as_string().ok_or_else(|| LoadError::Body("the body was not a string".to_owned()))?;
	trace!(len = text.len(), "Fetched navigation fragment.");
	Ok(text)
}
