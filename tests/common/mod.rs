// tests/common/mod.rs
//
// Canned catalog site for integration tests. Records every url it is asked for.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use catalog_scrape::core::net::{Fetch, FetchError, Fetched};

pub const LISTING: &str = "http://www.eucerin.it/products";

#[derive(Clone, Default)]
pub struct SiteFetcher {
    pages: HashMap<String, String>,
    redirects: HashMap<String, String>,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl SiteFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// Serve `to`'s page when `from` is requested.
    pub fn redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| u.as_str() == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Fetch for SiteFetcher {
    fn get(&mut self, url: &str) -> Result<Fetched, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        let served = self.redirects.get(url).map(String::as_str).unwrap_or(url);
        self.pages
            .get(served)
            .map(|body| Fetched::new(served, body.as_str()))
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

pub fn teaser(name: &str, img: &str, href: &str) -> String {
    format!(
        r#"<div class="base-teaser"><a href="{href}"><img src="{img}" alt=""></a><h3>{name}</h3></div>"#
    )
}

pub fn listing_page(teasers: &[String]) -> String {
    format!("<html><body><main>{}</main></body></html>", teasers.join("\n"))
}

pub fn detail_page(description: &str) -> String {
    format!(
        r#"<html><body><div class="product-head"><h1>x</h1><p class="subtitle">{description}</p></div></body></html>"#
    )
}

/// Three products on the listing, two of them with detail pages.
pub fn demo_site() -> SiteFetcher {
    SiteFetcher::new()
        .page(
            LISTING,
            &listing_page(&[
                teaser("UreaRepair PLUS Lotion 10%", "/img/urea.png?w=300", "/products/urea"),
                teaser("Hyaluron-Filler Night Cream", "/img/night.jpg", "/products/night"),
                teaser("Sun Gel-Cream", "/img/sun.png?v=1", "/products/sun"),
            ]),
        )
        .page("http://www.eucerin.it/products/urea", &detail_page("Lozione corpo, 10% urea"))
        .page("http://www.eucerin.it/products/night", &detail_page("Crema notte"))
        .page("http://www.eucerin.it/products/sun", "<html><body><h1>no head</h1></body></html>")
}
