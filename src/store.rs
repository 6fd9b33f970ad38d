// src/store.rs
//
// In-run page cache. Every document the crawl needs goes through here, so the
// listing page is downloaded once no matter how many products are searched.
// Entries live until the cache is dropped; there is no eviction.

use std::collections::HashMap;
use std::rc::Rc;

use crate::core::html::Page;
use crate::core::net::{Fetch, FetchError};

pub struct PageCache<F: Fetch> {
    fetcher: F,
    pages: HashMap<String, Rc<Page>>,
}

impl<F: Fetch> PageCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, pages: HashMap::new() }
    }

    /// Cached page for `url`, fetching and parsing it on first use.
    /// The page is keyed by `url` but parsed with the url it was served from,
    /// so links resolve against the post-redirect location.
    /// Failed fetches are not cached.
    pub fn fetch(&mut self, url: &str) -> Result<Rc<Page>, FetchError> {
        if let Some(page) = self.pages.get(url) {
            logd!(url, "page cache hit");
            return Ok(Rc::clone(page));
        }

        logf!(url, "fetching page");
        let fetched = self.fetcher.get(url)?;
        let page = Rc::new(Page::parse(&fetched.url, &fetched.body));
        self.pages.insert(s!(url), Rc::clone(&page));
        Ok(page)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
