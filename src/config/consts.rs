// src/config/consts.rs

// Net config
pub const DEFAULT_SITE: &str = "eucerin";
pub const LISTING_PATH: &str = "/products";
pub const USER_AGENT: &str = concat!("catalog_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Page structure
pub const SEL_TEASER: &str = ".base-teaser";
pub const SEL_HEADING: &str = "h3";
pub const SEL_IMAGE: &str = "img";
pub const SEL_LINK: &str = "a";
pub const SEL_PRODUCT_HEAD: &str = ".product-head";
pub const SEL_SUBTITLE: &str = ".subtitle";

// Record fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_IMAGE: &str = "image";
pub const FIELD_URL: &str = "url";
pub const FIELD_DESCRIPTION: &str = "description";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
