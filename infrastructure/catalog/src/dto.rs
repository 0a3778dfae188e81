use business::domain::catalog::model::Product;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductDoc>,
}

/// Product document as stored by the catalog. Only `_id`, `name` and
/// `price` are mandatory; other fields may be absent or `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategory: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategory_slug: String,
    pub price: f64,
    #[serde(default)]
    pub old_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

/// Reads `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<ProductDoc> for Product {
    fn from(doc: ProductDoc) -> Self {
        Product {
            id: doc.id,
            name: doc.name,
            category: doc.category,
            category_slug: doc.category_slug,
            subcategory: doc.subcategory,
            subcategory_slug: doc.subcategory_slug,
            price: doc.price,
            old_price: doc.old_price,
            discount: doc.discount,
            image: doc.image,
            images: doc.images,
            description: doc.description,
            featured: doc.featured,
        }
    }
}
