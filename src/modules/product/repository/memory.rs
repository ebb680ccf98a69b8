use super::{Product, ProductRepository, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryRepository {
    products: Mutex<HashMap<String, Product>>,
}

impl MemoryRepository {
    pub async fn insert(&self, product: Product) {
        self.products
            .lock()
            .await
            .insert(product.id.clone(), product);
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository {
    async fn find_many_by_ids(&self, ids: Vec<String>) -> Result<Vec<Product>> {
        let products = self.products.lock().await;

        Ok(ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }
}
