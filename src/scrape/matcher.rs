// src/scrape/matcher.rs
//
// One product against one listing page: find its teaser, read the teaser,
// then follow the link for the description.

use crate::config::options::PageSelectors;
use crate::core::html::Page;
use crate::core::net::{Fetch, FetchError};
use crate::data::Enrichment;
use crate::error::FatalError;
use crate::specs::{detail, listing};
use crate::store::PageCache;

/// `Ok(None)` when the listing has no teaser with this name.
pub fn match_product<F: Fetch>(
    cache: &mut PageCache<F>,
    listing_page: &Page,
    name: &str,
    sel: &PageSelectors,
) -> Result<Option<Enrichment>, FatalError> {
    let Some(teaser) = listing::find_teaser(listing_page, name, sel) else {
        logd!(product = name, listing = listing_page.url(), "no teaser matched");
        return Ok(None);
    };

    let fields = listing::read_teaser(teaser, listing_page.base_href(), sel)?;

    let description = match fields.url.as_deref() {
        Some(url) => extract_description(cache, url, sel)?,
        None => {
            logw!(product = name, "teaser has no link; skipping detail page");
            None
        }
    };

    Ok(Some(Enrichment {
        name: fields.name,
        image: fields.image,
        url: fields.url,
        description,
    }))
}

/// Description from the detail page at `url`. A page without one is not an error.
pub fn extract_description<F: Fetch>(
    cache: &mut PageCache<F>,
    url: &str,
    sel: &PageSelectors,
) -> Result<Option<String>, FetchError> {
    let page = cache.fetch(url)?;
    let description = detail::read_description(&page, sel);
    if description.is_none() {
        logd!(url, "detail page has no description");
    }
    Ok(description)
}
