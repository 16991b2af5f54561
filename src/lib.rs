//! rest_countries_rust
//!
//! A lightweight Rust library for querying, exploring, and exporting
//! country data from the REST Countries API. Pairs with the `rce` CLI.
//!
//! ### Features
//! - List countries by region, demonym, or an arbitrary field-filtered query
//! - Resolve one country by exact name and enrich it with related-country
//!   counts (same currency, language, capital), fetched concurrently
//! - Render listings as text cards and a multi-section detail panel
//! - Save listings as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use rce_rs::{Client, details, render};
//!
//! let client = Client::default();
//! let view = details::get_details(&client, "France")?;
//! let (locale, dec) = render::map_locale("en");
//! println!("{}", render::detail_panel(&view, locale, dec));
//! # Ok::<(), rce_rs::details::DetailError>(())
//! ```

pub mod api;
pub mod details;
pub mod models;
pub mod render;
pub mod storage;

pub use api::Client;
pub use details::{DetailError, DetailView, LookupProvider, get_details};
pub use models::Country;
