use crate::model::{NewProduct, Product, ProductFilter, ProductId, ProductPayload};
use anyhow::Result;

/// Operations the API layer needs from a product catalog backend
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All products in their current order
    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>>;
    /// Products matching every criterion set on `filter`
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;
    /// Products whose category equals `category`, ignoring case
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>>;
    /// Assign the next id and append. Returns the stored product.
    async fn add_product(&self, product: NewProduct) -> Result<Product>;
    /// Merge the supplied fields of `patch` into product `id`.
    /// Returns `None` if no such product exists.
    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPayload,
    ) -> Result<Option<Product>>;
    /// Remove product `id`. Returns false if it did not exist.
    async fn delete_product(&self, id: ProductId) -> Result<bool>;
    async fn count(&self) -> Result<usize>;
}
