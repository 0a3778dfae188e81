use serde::{Deserialize, Serialize};

/// A catalog product as returned by the storefront search API.
///
/// The catalog owns these records; this subsystem only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_slug: String,
    pub subcategory: String,
    pub subcategory_slug: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub discount: Option<f64>,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub featured: bool,
}

impl Product {
    /// Minimal product with only the identifying fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            category_slug: String::new(),
            subcategory: String::new(),
            subcategory_slug: String::new(),
            price,
            old_price: None,
            discount: None,
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            featured: false,
        }
    }

    /// The image to show in a listing: the main image, else the first gallery image.
    pub fn thumbnail(&self) -> Option<&str> {
        if !self.image.is_empty() {
            return Some(&self.image);
        }
        self.images.iter().map(String::as_str).find(|i| !i.is_empty())
    }
}

/// Result of a catalog search as seen by the session.
///
/// `degraded` is set when the product list is empty because the request failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    pub products: Vec<Product>,
    pub degraded: bool,
}

impl SearchOutcome {
    pub fn found(products: Vec<Product>) -> Self {
        Self {
            products,
            degraded: false,
        }
    }

    pub fn degraded() -> Self {
        Self {
            products: Vec::new(),
            degraded: true,
        }
    }
}
