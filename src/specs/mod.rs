// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the catalog site. Each spec
//! focuses on one kind of page and encodes *where the data lives in the HTML*
//! and *how to read it*.
//!
//! ## What lives here
//! - **Pure extraction** from an already-fetched `core::html::Page`.
//! - **Selector use**: which blocks to look in, and which element wins when a
//!   block has several (always the first, in document order).
//! - **Link resolution** through `core::uri`, against the page's base href.
//!
//! ## What does **not** live here
//! - **Fetching or caching** – that is `store::PageCache`.
//! - **Deciding what to crawl** – `scrape::matcher` and `scrape::crawl` call
//!   into the specs and own the run state.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::crawl → scrape::matcher → specs::listing::find_teaser
//!                                         ↘ specs::listing::read_teaser
//!                                         ↘ store::PageCache → specs::detail::read_description
//! ```
//!
//! ## Conventions
//! - A missing element is `None`, never an error. The only errors a spec
//!   returns are link-normalization failures, which abort the run.
//! - Text is returned raw (`text_of`), trimming is the caller's business.
//!
//! ## Current specs
//! - `listing` – product overview: find a teaser by name, read name/image/url.
//! - `detail` – product detail page: read the description.
pub mod detail;
pub mod listing;
