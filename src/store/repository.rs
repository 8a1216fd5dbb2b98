//! # Product Repository
//!
//! Owns the read-modify-write cycle for the product collection. The lock is
//! held across the whole cycle, so two writers interleaving load and save
//! can never drop each other's changes or hand out the same id twice.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::product::Product;

use super::backend::FileStore;
use super::errors::{StoreError, StoreResult};

/// Next available product id: one past the highest assigned, starting at 1.
pub fn next_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// File-backed store for the product collection
#[derive(Debug)]
pub struct ProductStore<B: FileStore> {
    backend: B,
    path: PathBuf,
    lock: Mutex<()>,
}

impl<B: FileStore> ProductStore<B> {
    /// Create a store over the given backend and data file path
    pub fn new(backend: B, path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection.
    ///
    /// A missing or empty data file is an empty collection, not an error.
    pub fn load(&self) -> StoreResult<Vec<Product>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        self.load_locked()
    }

    /// Persist the full collection, replacing whatever was on disk.
    pub fn save(&self, products: &[Product]) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        self.save_locked(products)
    }

    /// Insert a product, assigning the next free id.
    ///
    /// Id assignment happens inside the locked load-save cycle, so two
    /// concurrent inserts always get distinct ids. Returns the product as
    /// stored. Any id on the incoming product is discarded.
    pub fn insert(&self, mut product: Product) -> StoreResult<Product> {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut products = self.load_locked()?;
        product.id = next_id(&products);
        products.push(product.clone());
        self.save_locked(&products)?;
        Ok(product)
    }

    /// Run `f` against the collection as a single transaction.
    ///
    /// The lock is held across load, `f`, and save. `f` returns `None` to
    /// decline the update, in which case nothing is written and `Ok(None)`
    /// comes back; `Some(value)` commits the mutated collection.
    pub fn with_products<T>(
        &self,
        f: impl FnOnce(&mut Vec<Product>) -> Option<T>,
    ) -> StoreResult<Option<T>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut products = self.load_locked()?;
        match f(&mut products) {
            Some(value) => {
                self.save_locked(&products)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Check that the data file is currently readable
    pub fn check_liveness(&self) -> StoreResult<()> {
        self.backend.check_liveness(&self.path)
    }

    fn load_locked(&self) -> StoreResult<Vec<Product>> {
        let bytes = match self.backend.read(&self.path) {
            Ok(bytes) => bytes,
            Err(StoreError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn save_locked(&self, products: &[Product]) -> StoreResult<()> {
        let data =
            serde_json::to_vec_pretty(products).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.backend.write(&self.path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::seed_products;
    use crate::store::LocalFileStore;
    use std::fs;
    use tempfile::TempDir;

    fn test_store(temp: &TempDir) -> ProductStore<LocalFileStore> {
        ProductStore::new(LocalFileStore::new(), temp.path().join("data.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        fs::write(store.path(), b"").unwrap();

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let seed = seed_products();

        store.save(&seed).unwrap();
        assert_eq!(store.load().unwrap(), seed);
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        store.save(&seed_products()).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"name\": \"Laptop\""));
    }

    #[test]
    fn test_malformed_file_is_decode_error() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        fs::write(store.path(), b"{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), 1);

        let mut products = seed_products();
        assert_eq!(next_id(&products), 4);

        // Holes below the maximum are not reused
        products.remove(1);
        assert_eq!(next_id(&products), 4);
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        let first = store
            .insert(Product {
                name: "First".to_string(),
                id: 99, // caller-supplied ids are discarded
                ..Default::default()
            })
            .unwrap();
        let second = store
            .insert(Product {
                name: "Second".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_with_products_commits_on_some() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store.save(&seed_products()).unwrap();

        let removed = store
            .with_products(|products| {
                let idx = products.iter().position(|p| p.id == 2)?;
                products.remove(idx);
                Some(())
            })
            .unwrap();

        assert_eq!(removed, Some(()));
        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|p| p.id != 2));
    }

    #[test]
    fn test_with_products_skips_save_on_none() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store.save(&seed_products()).unwrap();
        let before = fs::read(store.path()).unwrap();

        let result: Option<()> = store
            .with_products(|products| {
                products.clear(); // discarded because the closure declines
                None
            })
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }
}
