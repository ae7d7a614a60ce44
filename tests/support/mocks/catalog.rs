// tests/support/mocks/catalog.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use catalog_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use catalog_core::domain::errors::{DomainError, DomainResult};
use catalog_core::domain::product::{
    NewProduct, Product, ProductId, ProductRepository, ProductUpdate,
};
use catalog_core::domain::slug::Slug;

#[derive(Default)]
struct State {
    next_id: i64,
    steal_next_product_slug: bool,
    categories: BTreeMap<i64, Category>,
    products: BTreeMap<i64, Product>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn category_slug_taken(&self, slug: &Slug, excluding: Option<CategoryId>) -> bool {
        self.categories
            .values()
            .any(|c| &c.slug == slug && Some(c.id) != excluding)
    }

    fn product_slug_taken(&self, slug: &Slug, excluding: Option<ProductId>) -> bool {
        self.products
            .values()
            .any(|p| &p.slug == slug && Some(p.id) != excluding)
    }
}

/// Both repositories over one shared store, with the same guarantees the
/// database schema gives: unique slugs, products must reference an existing
/// category, and a referenced category cannot be removed.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<State>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("catalog state poisoned")
    }

    pub fn category_count(&self) -> usize {
        self.lock().categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }

    /// Make the next product insert or update fail as if a concurrent request
    /// had claimed its slug after validation.
    pub fn steal_next_product_slug(&self) {
        self.lock().steal_next_product_slug = true;
    }

    /// Attach a product behind the services' back, as a concurrent request would.
    pub fn force_insert_product(&self, product: NewProduct) -> Product {
        let mut state = self.lock();
        let id = state.next_id();
        let product = Product {
            id: ProductId::new(id).expect("positive id"),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            number_in_stock: product.number_in_stock,
            image_url: product.image_url,
            category_id: product.category_id,
        };
        state.products.insert(id, product.clone());
        product
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.lock();
        if state.category_slug_taken(&category.slug, None) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = state.next_id();
        let category = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            image_url: category.image_url,
        };
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.lock();
        if state.category_slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let category = state
            .categories
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = update.name;
        category.slug = update.slug;
        category.description = update.description;
        category.image_url = update.image_url;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.lock();
        if state.products.values().any(|p| p.category_id == id) {
            return Err(DomainError::Conflict("category is referenced by products".into()));
        }
        state
            .categories
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.lock().categories.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .values()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<CategoryId>) -> DomainResult<bool> {
        Ok(self.lock().category_slug_taken(slug, excluding))
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.lock().categories.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.name
                .as_str()
                .to_lowercase()
                .cmp(&b.name.as_str().to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(categories)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.lock();
        if std::mem::take(&mut state.steal_next_product_slug)
            || state.product_slug_taken(&product.slug, None)
        {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        if !state.categories.contains_key(&i64::from(product.category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let id = state.next_id();
        let product = Product {
            id: ProductId::new(id)?,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            number_in_stock: product.number_in_stock,
            image_url: product.image_url,
            category_id: product.category_id,
        };
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.lock();
        if std::mem::take(&mut state.steal_next_product_slug)
            || state.product_slug_taken(&update.slug, Some(update.id))
        {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        if !state.categories.contains_key(&i64::from(update.category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let product = state
            .products
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        product.name = update.name;
        product.slug = update.slug;
        product.description = update.description;
        product.price = update.price;
        product.number_in_stock = update.number_in_stock;
        product.image_url = update.image_url;
        product.category_id = update.category_id;
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.lock()
            .products
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("product not found".into()))
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.lock().products.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        Ok(self
            .lock()
            .products
            .values()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<ProductId>) -> DomainResult<bool> {
        Ok(self.lock().product_slug_taken(slug, excluding))
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .lock()
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect();
        products.sort_by(|a, b| {
            a.name
                .as_str()
                .to_lowercase()
                .cmp(&b.name.as_str().to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(products)
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        Ok(self
            .lock()
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .count() as u64)
    }

    async fn count_all_by_category(&self) -> DomainResult<HashMap<CategoryId, u64>> {
        let mut counts = HashMap::new();
        for product in self.lock().products.values() {
            *counts.entry(product.category_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
