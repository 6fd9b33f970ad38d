// src/data.rs
//
// Product records and the table they travel in.
//
// - ProductRecord: one input row as ordered (field, value) pairs. Field order
//                  is the input column order; new fields are appended.
// - SourceTable:   header row + records, in input order. The header survives
//                  even when there are no records so the output keeps its shape.

use crate::config::consts::{FIELD_DESCRIPTION, FIELD_IMAGE, FIELD_NAME, FIELD_URL};

/// Columns the crawl fills in, in output order.
pub const ENRICHED_FIELDS: [&str; 3] = [FIELD_IMAGE, FIELD_URL, FIELD_DESCRIPTION];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductRecord {
    fields: Vec<(String, String)>,
}

impl ProductRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (key, value) pairs. A repeated key keeps its first position
    /// and its last value.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut rec = Self::new();
        for (k, v) in pairs {
            rec.set(k, v);
        }
        rec
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The record's `name` field, empty if absent.
    pub fn name(&self) -> &str {
        self.get(FIELD_NAME).unwrap_or("")
    }

    /// Replace in place, or append if the key is new.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Copy of this record with the scraped fields applied.
    /// Fields the page didn't provide are left as they were.
    pub fn enriched(&self, found: &Enrichment) -> Self {
        let mut out = self.clone();
        out.set(FIELD_NAME, found.name.as_str());
        if let Some(image) = &found.image {
            out.set(FIELD_IMAGE, image.as_str());
        }
        if let Some(url) = &found.url {
            out.set(FIELD_URL, url.as_str());
        }
        if let Some(description) = &found.description {
            out.set(FIELD_DESCRIPTION, description.as_str());
        }
        out
    }
}

/// What a listing match (plus its detail page) yielded for one product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enrichment {
    /// Heading text as it appears on the listing page.
    pub name: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<ProductRecord>,
}

impl SourceTable {
    /// Input header followed by any enrichment column it doesn't already have.
    pub fn output_headers(&self) -> Vec<String> {
        let mut out = self.headers.clone();
        for f in ENRICHED_FIELDS {
            if !out.iter().any(|h| h == f) {
                out.push(s!(f));
            }
        }
        out
    }

    /// Rows laid out under `output_headers()`; unset fields are empty.
    pub fn output_rows(&self) -> Vec<Vec<String>> {
        let headers = self.output_headers();
        self.records
            .iter()
            .map(|r| {
                headers
                    .iter()
                    .map(|h| s!(r.get(h).unwrap_or("")))
                    .collect()
            })
            .collect()
    }
}
