// src/specs/detail.rs
//! Scraping *spec* for a product detail page.
//!
//! The description is the text of the first `.subtitle` inside the first
//! `.product-head`. Either block missing means no description.

use crate::config::options::PageSelectors;
use crate::core::html::{Page, first_in, text_of};

pub fn read_description(page: &Page, sel: &PageSelectors) -> Option<String> {
    let head = page.first(&sel.product_head)?;
    first_in(head, &sel.subtitle).map(text_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(body: &str) -> Page {
        Page::parse("http://x/p/cream", &format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn reads_first_subtitle_of_first_product_head() {
        let page = detail(r#"
            <p class="subtitle">outside</p>
            <section class="product-head">
              <h1>Cream</h1>
              <p class="subtitle">Rich <em>daily</em> care</p>
              <p class="subtitle">second</p>
            </section>
            <section class="product-head"><p class="subtitle">other head</p></section>
        "#);
        assert_eq!(read_description(&page, &PageSelectors::default()).as_deref(), Some("Rich daily care"));
    }

    #[test]
    fn only_the_first_product_head_is_searched() {
        let page = detail(r#"
            <section class="product-head"><h1>No subtitle here</h1></section>
            <section class="product-head"><p class="subtitle">too late</p></section>
        "#);
        assert_eq!(read_description(&page, &PageSelectors::default()), None);
    }

    #[test]
    fn missing_blocks_yield_none() {
        let page = detail(r#"<p class="subtitle">orphan</p>"#);
        assert_eq!(read_description(&page, &PageSelectors::default()), None);
    }
}
