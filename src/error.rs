use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a placeholder's navigation couldn't be loaded.
///
/// Every variant is terminal for that placeholder. There is no distinction between transient and permanent failures.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("no `window` or `document` is available")]
	NoWindow,
	#[error("querying {selector:?} failed: {message}")]
	Query { selector: String, message: String },
	#[error("could not build the request for {url:?}: {message}")]
	Request { url: String, message: String },
	#[error("fetching the navigation fragment failed: {0}")]
	Network(String),
	#[error("the navigation fragment request returned {status} {status_text}")]
	Status { status: u16, status_text: String },
	#[error("reading the navigation fragment failed: {0}")]
	Body(String),
}

/// A readable description of a thrown or rejected [`JsValue`].
pub(crate) fn js_message(value: &JsValue) -> String {
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		String::from(error.message())
	} else if let Some(message) = value.as_string() {
		message
	} else {
		format!("{:?}", value)
	}
}
