#![warn(missing_docs)]

//! Web page fetching and reduction library that retrieves raw markup
//! through an external HTTP client and pares it down to content.
//!
//! Pare fetches a single page and hands the raw markup to the
//! `pare_transformations` pipeline for reduction. It never builds a DOM
//! and never crawls: one URL in, one reduced document out.
//!
//! # Basic usage
//!
//! First, you will need to add `pare` to your `Cargo.toml`.
//!
//! Next, fetch a page with the default configuration:
//!
//! ```no_run
//! use pare::configuration::Configuration;
//! use pare::page::Page;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let page = Page::new("https://example.com", &Configuration::new()).await;
//! # }
//! ```

extern crate log;
pub extern crate tokio;
pub extern crate url;

/// Configuration structure for the fetcher.
pub mod configuration;
/// A page fetched.
pub mod page;
/// Application utils.
pub mod utils;
