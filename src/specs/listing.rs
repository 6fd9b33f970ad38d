// src/specs/listing.rs
//! Scraping *spec* for the product overview (`/products`).
//!
//! Each product is a teaser block (`.base-teaser`) holding a heading (`h3`),
//! an image (`img`) and a link (`a`) to its detail page.
//!
//! Matching compares the heading against the wanted name with surrounding
//! whitespace trimmed and case folded. The first teaser that matches wins;
//! duplicates further down the page are never looked at.

use scraper::ElementRef;

use crate::config::options::PageSelectors;
use crate::core::html::{Page, attr, first_in, text_of};
use crate::core::sanitize::fold_name;
use crate::core::uri::{self, NormalizeError};

/// Fields read off a matched teaser. Links are already absolute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeaserFields {
    pub name: String,
    pub image: Option<String>,
    pub url: Option<String>,
}

/// Teaser blocks in document order.
pub fn teasers<'a>(page: &'a Page, sel: &PageSelectors) -> Vec<ElementRef<'a>> {
    page.select(&sel.teaser)
}

/// Raw heading text of a teaser, if it has a heading.
pub fn heading(teaser: ElementRef<'_>, sel: &PageSelectors) -> Option<String> {
    first_in(teaser, &sel.heading).map(text_of)
}

/// First teaser whose heading equals `name` (trimmed, case-insensitive).
pub fn find_teaser<'a>(page: &'a Page, name: &str, sel: &PageSelectors) -> Option<ElementRef<'a>> {
    let wanted = fold_name(name);
    teasers(page, sel).into_iter().find(|t| {
        heading(*t, sel).is_some_and(|h| fold_name(&h) == wanted)
    })
}

/// Read name, image and url from a teaser.
///
/// Image and url are independent: a teaser without an `img` (or without a
/// `src`) still yields its url, and vice versa. A link that is present but
/// not root-relative is an error.
pub fn read_teaser(
    teaser: ElementRef<'_>,
    base_href: &str,
    sel: &PageSelectors,
) -> Result<TeaserFields, NormalizeError> {
    let name = heading(teaser, sel).unwrap_or_default();

    // Query strings only select image variants; drop them.
    let image = first_in(teaser, &sel.image)
        .and_then(|img| attr(img, "src"))
        .map(|src| uri::resolve(base_href, uri::strip_query(src)))
        .transpose()?;

    let url = first_in(teaser, &sel.link)
        .and_then(|a| attr(a, "href"))
        .map(|href| uri::resolve(base_href, href))
        .transpose()?;

    Ok(TeaserFields { name, image, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://www.shop.it/products";

    fn listing(body: &str) -> Page {
        Page::parse(BASE, &format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn finds_first_matching_teaser_ignoring_case_and_outer_space() {
        let page = listing(r#"
            <div class="base-teaser"><h3>Other</h3></div>
            <div class="base-teaser"><h3>
                UreaRepair PLUS Lotion 10%
            </h3><a href="/p/first">x</a></div>
            <div class="base-teaser"><h3>urearepair plus lotion 10%</h3><a href="/p/second">x</a></div>
        "#);
        let sel = PageSelectors::default();

        let t = find_teaser(&page, "  UREAREPAIR plus lotion 10% ", &sel).unwrap();
        let fields = read_teaser(t, page.base_href(), &sel).unwrap();
        assert_eq!(fields.url.as_deref(), Some("http://www.shop.it/p/first"));
        assert!(fields.name.contains("UreaRepair PLUS Lotion 10%"));
        assert_ne!(fields.name.trim(), fields.name);
    }

    #[test]
    fn no_match_is_none() {
        let page = listing(r#"<div class="base-teaser"><h3>Alpha</h3></div><div class="base-teaser"></div>"#);
        assert!(find_teaser(&page, "Beta", &PageSelectors::default()).is_none());
        assert!(find_teaser(&page, "", &PageSelectors::default()).is_none());
    }

    #[test]
    fn image_query_is_stripped_before_resolving() {
        let page = listing(r#"
            <div class="base-teaser">
              <img src="/img/cream.png?v=2&w=300"><h3>Cream</h3><a href="/p/cream">more</a>
            </div>
        "#);
        let sel = PageSelectors::default();
        let t = find_teaser(&page, "cream", &sel).unwrap();
        let fields = read_teaser(t, "http://x/products", &sel).unwrap();
        assert_eq!(fields.image.as_deref(), Some("http://x/img/cream.png"));
        assert_eq!(fields.url.as_deref(), Some("http://x/p/cream"));
        assert_eq!(fields.name, "Cream");
    }

    #[test]
    fn missing_image_or_link_leaves_field_unset() {
        let page = listing(r#"
            <div class="base-teaser"><h3>NoImage</h3><a href="/p/1">x</a></div>
            <div class="base-teaser"><h3>NoLink</h3><img src="/i/2.png"></div>
            <div class="base-teaser"><h3>NoSrc</h3><img alt="x"><a>no href</a></div>
        "#);
        let sel = PageSelectors::default();

        let f = read_teaser(find_teaser(&page, "noimage", &sel).unwrap(), BASE, &sel).unwrap();
        assert_eq!((f.image, f.url.as_deref()), (None, Some("http://www.shop.it/p/1")));

        let f = read_teaser(find_teaser(&page, "nolink", &sel).unwrap(), BASE, &sel).unwrap();
        assert_eq!((f.image.as_deref(), f.url), (Some("http://www.shop.it/i/2.png"), None));

        let f = read_teaser(find_teaser(&page, "nosrc", &sel).unwrap(), BASE, &sel).unwrap();
        assert_eq!((f.image, f.url), (None, None));
    }

    #[test]
    fn relative_link_is_an_error() {
        let page = listing(r#"<div class="base-teaser"><h3>Cream</h3><a href="cream.html">x</a></div>"#);
        let sel = PageSelectors::default();
        let t = find_teaser(&page, "Cream", &sel).unwrap();
        let err = read_teaser(t, BASE, &sel).unwrap_err();
        assert!(matches!(err, NormalizeError::Unsupported { ref uri, .. } if uri == "cream.html"));
    }
}
