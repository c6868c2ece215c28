#![doc(html_root_url = "https://docs.rs/site-nav-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Shared navigation for static sites.
//!
//! Pages carry one or more empty placeholders (`<div data-site-nav></div>`).
//! Once the document is ready, [`loader::start`] fetches `nav.html` into each of them, marks the link to the current page,
//! opens the group containing it and makes every group's toggle collapse and expand its sublist.
//!
//! The decoration logic runs on an explicit model ([`tree::NavTree`]) that is loaded from and projected back onto the DOM,
//! so it can be exercised without a browser.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod config;
pub mod decorate;
pub mod error;
pub mod fetch;
pub mod load;
pub mod loader;
pub mod path;
pub mod render;
pub mod site;
pub mod tree;

pub use config::NavConfig;
pub use error::LoadError;
pub use loader::{init_with, load_into, LoadState};

#[cfg(feature = "auto-start")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn auto_start() {
	loader::start();
}
