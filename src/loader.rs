//! Page-level orchestration: find placeholders, fetch the fragment into each, decorate.

use crate::{decorate::decorate, error::js_message, fetch::fetch_fragment, path, LoadError, NavConfig};
use tracing::{debug, error, info, instrument};
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, Document, Element};

/// The lifecycle of a single placeholder.
///
/// `Loaded` and `Failed` are terminal for the lifetime of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
	Idle,
	Loading,
	Loaded,
	Failed,
}

impl LoadState {
	fn advance(self, next: Self) -> Self {
		debug_assert!(
			matches!((self, next), (Self::Idle, Self::Loading) | (Self::Loading, Self::Loaded | Self::Failed)),
			"Invalid placeholder transition {:?} -> {:?}",
			self,
			next
		);
		debug!(from = ?self, to = ?next, "Placeholder transition.");
		next
	}
}

/// Fetches the fragment into `placeholder` and decorates it for `current_path`.
///
/// Failures never escape: the placeholder shows the configured error markup instead, and the error is logged.
/// Nothing is decorated in that case.
#[instrument(skip(placeholder, current_path))]
pub async fn load_into(placeholder: &Element, current_path: &str, config: &NavConfig) -> LoadState {
	let state = LoadState::Idle.advance(LoadState::Loading);
	match fetch_fragment(config.fragment_url).await {
		Ok(markup) => {
			placeholder.set_inner_html(&markup);
			decorate(placeholder, current_path, config);
			state.advance(LoadState::Loaded)
		}
		Err(error) => {
			placeholder.set_inner_html(config.error_markup);
			error!(%error, "Navigation could not be loaded.");
			state.advance(LoadState::Failed)
		}
	}
}

/// Starts loading into every placeholder of the current document and returns how many there are.
///
/// Each placeholder loads in its own task. Their completions are unordered, and one's failure doesn't affect the others.
///
/// # Errors
///
/// Iff there's no document to search or the placeholder selector is rejected.
#[instrument]
pub fn init_with(config: NavConfig) -> Result<usize, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let document = window.document().ok_or(LoadError::NoWindow)?;

	let selector = config.placeholder_selector();
	let placeholders = document.query_selector_all(&selector).map_err(|error| LoadError::Query {
		message: js_message(&error),
		selector,
	})?;

	let pathname = window.location().pathname().unwrap_or_else(|error| {
		error!("Could not read the location's path name, assuming the default page: {}", js_message(&error));
		String::new()
	});
	let current = path::current_page(&pathname).to_owned();
	if cfg!(feature = "dangerous-logging") {
		debug!(%current, "Current page.");
	}

	let mut count = 0;
	for i in 0..placeholders.length() {
		let Some(placeholder) = placeholders.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
			continue;
		};
		let current = current.clone();
		spawn_local(async move {
			load_into(&placeholder, &current, &config).await;
		});
		count += 1;
	}
	info!("Loading navigation into {} placeholder(s).", count);
	Ok(count)
}

/// Runs `init` once `document` has finished parsing, or right away if it already has.
pub fn when_ready(document: &Document, init: impl FnOnce() + 'static) {
	if document.ready_state() != "loading" {
		return init();
	}

	let listener = Closure::once(init);
	let options = AddEventListenerOptions::new();
	options.set_once(true);
	match document.add_event_listener_with_callback_and_add_event_listener_options("DOMContentLoaded", listener.as_ref().unchecked_ref(), &options) {
		Ok(()) => listener.forget(),
		Err(error) => error!("Could not wait for DOMContentLoaded: {}", js_message(&error)),
	}
}

/// Installs console logging and loads navigation with the default [`NavConfig`] once the document is ready.
pub fn start() {
	if tracing_wasm::try_set_as_global_default().is_err() {
		debug!("A global tracing subscriber is already set.");
	}

	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		return error!("{}", LoadError::NoWindow);
	};
	when_ready(&document, || {
		if let Err(error) = init_with(NavConfig::default()) {
			error!(%error, "Navigation could not be initialized.");
		}
	});
}
