//! Static display content supplied to the search overlay.
//!
//! The overlay never fetches or filters anything: it renders the recent
//! searches, trending products and suggested queries it was given, in the
//! order they were given. The page chrome (brand and navigation links) lives
//! here too since it is the same kind of read-only collaborator data.
//!
//! Content comes from built-in placeholder data or from a TOML file read once
//! when the plugin loads:
//!
//! ```toml
//! brand = "DIGITAL CONCIERGE"
//! recent_searches = ["linen shirt", "desk lamp"]
//! suggested_queries = ["gifts under $50"]
//!
//! [[nav_links]]
//! href = "/"
//! label = "Home"
//! active = true
//!
//! [[trending]]
//! name = "Arc Floor Lamp"
//! price = "$189"
//! image_url = "/products/arc-lamp.png"
//! ```
//!
//! Missing keys fall back to the built-in values for that key only.

use crate::domain::error::{ConciergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A product card shown in the trending grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingProduct {
    /// Product display name.
    pub name: String,
    /// Price exactly as it should be displayed (currency included).
    pub price: String,
    /// Image reference. Terminals cannot show it, so cards show its file name.
    pub image_url: String,
}

impl TrendingProduct {
    /// Convenience constructor used by the built-in data and tests.
    #[must_use]
    pub fn new(name: &str, price: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Returns the last path segment of the image reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use concierge::domain::TrendingProduct;
    ///
    /// let product = TrendingProduct::new("Lamp", "$10", "/products/lamp.png?w=200");
    /// assert_eq!(product.image_label(), "lamp.png");
    /// ```
    #[must_use]
    pub fn image_label(&self) -> &str {
        let without_query = self
            .image_url
            .split(['?', '#'])
            .next()
            .unwrap_or(&self.image_url);
        without_query
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(without_query)
    }
}

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link target. Kept for completeness, routing is out of scope.
    pub href: String,
    /// Visible label.
    pub label: String,
    /// Whether this link is the current page.
    #[serde(default)]
    pub active: bool,
}

/// Read-only content rendered by the page and the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticContent {
    /// Brand shown at the left of the header.
    pub brand: String,
    /// Header navigation links, left to right.
    pub nav_links: Vec<NavLink>,
    /// Recent searches, most recent first.
    pub recent_searches: Vec<String>,
    /// Trending product cards.
    pub trending: Vec<TrendingProduct>,
    /// Suggested query rows.
    pub suggested_queries: Vec<String>,
}

impl Default for StaticContent {
    fn default() -> Self {
        Self {
            brand: "DIGITAL CONCIERGE".to_string(),
            nav_links: vec![NavLink {
                href: "/".to_string(),
                label: "Home".to_string(),
                active: true,
            }],
            recent_searches: vec![
                "linen shirt".to_string(),
                "ceramic mugs".to_string(),
                "walnut desk".to_string(),
                "wireless earbuds".to_string(),
            ],
            trending: vec![
                TrendingProduct::new("Arc Floor Lamp", "$189", "/products/arc-floor-lamp.png"),
                TrendingProduct::new("Wool Throw", "$74", "/products/wool-throw.png"),
                TrendingProduct::new("Pour-Over Set", "$42", "/products/pour-over-set.png"),
                TrendingProduct::new("Canvas Tote", "$28", "/products/canvas-tote.png"),
                TrendingProduct::new("Oak Side Table", "$156", "/products/oak-side-table.png"),
                TrendingProduct::new("Desk Planter", "$19", "/products/desk-planter.png"),
            ],
            suggested_queries: vec![
                "gifts under $50".to_string(),
                "minimalist home office".to_string(),
                "cozy reading corner".to_string(),
                "best sellers this week".to_string(),
                "new arrivals".to_string(),
            ],
        }
    }
}

impl StaticContent {
    /// Parses content from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConciergeError::Content`] if the TOML is invalid or a field
    /// has the wrong type.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| ConciergeError::Content(format!("failed to parse content TOML: {e}")))
    }

    /// Loads content from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConciergeError::Io`] if the file cannot be read and
    /// [`ConciergeError::Content`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
