use std::path::Path;

use anyhow::{anyhow, Result};
use parking_lot::Mutex;

use crate::logic::apply_patch;
use crate::model::{NewProduct, Product, ProductFilter, ProductId, ProductPayload};
use crate::seed;
use crate::store::traits::CatalogStore;

/// Catalog held in process memory. All state is lost on shutdown.
///
/// Every operation holds the lock for its whole duration, so id assignment,
/// merge-on-update and delete never interleave with another call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    /// Seed from a JSON file. A missing or corrupt file gives an empty store.
    pub fn from_seed(path: impl AsRef<Path>) -> Self {
        Self::with_products(seed::load_or_empty(path))
    }

    fn next_id(products: &[Product]) -> Result<ProductId> {
        let max = products.iter().map(|product| product.id).max().unwrap_or(0);
        max.checked_add(1)
            .ok_or_else(|| anyhow!("Product id space exhausted: highest id is {}", max))
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.lock().clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let products = self.products.lock();
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let products = self.products.lock();
        if filter.is_empty() {
            return Ok(products.clone());
        }

        let matches = filter.matcher();
        Ok(products
            .iter()
            .filter(|&product| matches(product))
            .cloned()
            .collect())
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>> {
        self.search_products(&ProductFilter::by_category(category)).await
    }

    async fn add_product(&self, product: NewProduct) -> Result<Product> {
        let mut products = self.products.lock();
        let product = product.into_product(Self::next_id(&products)?);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPayload,
    ) -> Result<Option<Product>> {
        let mut products = self.products.lock();
        let Some(product) = products.iter_mut().find(|product| product.id == id) else {
            return Ok(None);
        };

        apply_patch(product, patch);
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool> {
        let mut products = self.products.lock();
        match products.iter().position(|product| product.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.products.lock().len())
    }
}
