use std::path::Path;

use itertools::Itertools;
use log::{error, info, warn};
use thiserror::Error;

use crate::model::Product;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            SeedError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Read a JSON array of products from `path`
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, SeedError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: display,
        source,
    })
}

/// Load the seed catalog, falling back to an empty one if the file is
/// missing or unreadable. Later records reusing an earlier id are dropped.
pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Product> {
    let path = path.as_ref();

    let products = match load_products(path) {
        Ok(products) => products,
        Err(e) if e.is_missing() => {
            warn!("Seed file {} not found, starting with an empty catalog", path.display());
            return Vec::new();
        }
        Err(e) => {
            error!("{}, starting with an empty catalog", e);
            return Vec::new();
        }
    };

    let loaded = products.len();
    let products: Vec<Product> = products.into_iter().unique_by(|product| product.id).collect();
    if products.len() < loaded {
        warn!(
            "Dropped {} seed record(s) with duplicate ids from {}",
            loaded - products.len(),
            path.display()
        );
    }

    info!("Loaded {} product(s) from {}", products.len(), path.display());
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_seed(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "product-catalog-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_products_from_json_array() {
        let path = temp_seed(
            "valid",
            r#"[{"id":1,"name":"A","category":"Toys","price":5.0,"quantity":10},
                {"id":2,"name":"B","category":"Books","price":12.5,"quantity":1}]"#,
        );

        let products = load_or_empty(&path);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A");
        assert_eq!(products[1].price, 12.5);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let path = std::env::temp_dir().join("product-catalog-does-not-exist.json");
        assert!(load_products(&path).unwrap_err().is_missing());
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn corrupt_file_yields_empty_catalog() {
        let path = temp_seed("corrupt", "[{\"id\": 1, \"name\": ");

        let err = load_products(&path).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
        assert!(load_or_empty(&path).is_empty());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let path = temp_seed(
            "duplicates",
            r#"[{"id":1,"name":"first","category":"Toys","price":5.0,"quantity":1},
                {"id":1,"name":"second","category":"Toys","price":6.0,"quantity":1}]"#,
        );

        let products = load_or_empty(&path);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "first");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn bundled_seed_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/products.json");
        let products = load_products(path).unwrap();
        assert!(!products.is_empty());
    }
}
