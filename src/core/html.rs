// src/core/html.rs
//
// Thin document layer over `scraper`. The crawl only needs four things:
// select by CSS (class or tag), read an attribute, read text content and
// know the base href links resolve against.

use scraper::{ElementRef, Html, Selector};
use url::Url;

pub struct Page {
    url: String,
    base_href: String,
    doc: Html,
}

impl Page {
    /// Parse `body` fetched from `url`.
    pub fn parse(url: &str, body: &str) -> Self {
        let doc = Html::parse_document(body);
        let base_href = detect_base_href(&doc, url);
        Self { url: s!(url), base_href, doc }
    }

    pub fn url(&self) -> &str { &self.url }
    pub fn base_href(&self) -> &str { &self.base_href }

    /// All elements matching `css`, in document order.
    /// An unparsable selector matches nothing.
    pub fn select<'a>(&'a self, css: &str) -> Vec<ElementRef<'a>> {
        match Selector::parse(css) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(_) => {
                logw!(selector = css, "invalid css selector");
                Vec::new()
            }
        }
    }

    pub fn first<'a>(&'a self, css: &str) -> Option<ElementRef<'a>> {
        self.select(css).into_iter().next()
    }
}

/// First descendant of `scope` matching `css`.
pub fn first_in<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    scope.select(&sel).next()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Concatenated text of all descendant text nodes, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `<base href>` when present and resolvable, otherwise the fetched url.
fn detect_base_href(doc: &Html, url: &str) -> String {
    let Ok(sel) = Selector::parse("base[href]") else {
        return s!(url);
    };
    let Some(href) = doc.select(&sel).next().and_then(|el| el.value().attr("href")) else {
        return s!(url);
    };

    match Url::parse(href) {
        Ok(abs) => abs.into(),
        Err(_) => Url::parse(url)
            .and_then(|u| u.join(href))
            .map(String::from)
            .unwrap_or_else(|_| s!(url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_href_defaults_to_page_url() {
        let page = Page::parse("http://x/products", "<html><body><p>hi</p></body></html>");
        assert_eq!(page.base_href(), "http://x/products");
        assert_eq!(page.url(), "http://x/products");
    }

    #[test]
    fn base_tag_overrides_page_url() {
        let html = r#"<html><head><base href="http://cdn.x/root/"></head><body></body></html>"#;
        let page = Page::parse("http://x/products", html);
        assert_eq!(page.base_href(), "http://cdn.x/root/");

        let html = r#"<html><head><base href="/other/"></head><body></body></html>"#;
        let page = Page::parse("http://x/products", html);
        assert_eq!(page.base_href(), "http://x/other/");
    }

    #[test]
    fn select_text_and_attr() {
        let html = r#"
            <div class="box"><h3> Alpha <b>Cream</b></h3><a href="/a">go</a></div>
            <div class="box"><h3>Beta</h3></div>
        "#;
        let page = Page::parse("http://x/", html);
        let boxes = page.select(".box");
        assert_eq!(boxes.len(), 2);

        let h3 = first_in(boxes[0], "h3").unwrap();
        assert_eq!(text_of(h3), " Alpha Cream");
        let a = first_in(boxes[0], "a").unwrap();
        assert_eq!(attr(a, "href"), Some("/a"));
        assert!(first_in(boxes[1], "a").is_none());
    }

    #[test]
    fn bad_selector_matches_nothing() {
        let page = Page::parse("http://x/", "<p>x</p>");
        assert!(page.select("..nope[").is_empty());
        assert!(page.first("..nope[").is_none());
    }
}
