//! Category registry domain logic.
use log::info;

use crate::domain::errors::TrackerError;
use crate::domain::models::category::{Category, DEFAULT_CATEGORIES};
use crate::storage::csv::CategoryRepository;
use crate::storage::traits::CategoryStorage;

/// The category registry: the five defaults seeded on every start, followed
/// by user-added categories in registration order. User additions persist
/// by appending to the category file; the defaults never do.
pub struct CategoryService {
    categories: Vec<Category>,
    repository: CategoryRepository,
}

impl CategoryService {
    /// Seed the defaults, then load persisted names. A name already
    /// registered (defaults included) is not registered twice, so a file
    /// that accumulated duplicates over past runs loads clean.
    pub fn load(repository: CategoryRepository) -> Result<Self, TrackerError> {
        let mut categories: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .map(|name| Category::new(*name))
            .collect();
        for name in repository.load_category_names()? {
            if !categories.iter().any(|c| c.name == name) {
                categories.push(Category::new(name));
            }
        }
        Ok(Self {
            categories,
            repository,
        })
    }

    /// Read-only view, defaults first, then registration order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Register and persist a new category. The empty-name check is the
    /// only validation; a duplicate of an existing name is appended as-is.
    pub fn add_category(&mut self, name: &str) -> Result<Category, TrackerError> {
        if name.trim().is_empty() {
            return Err(TrackerError::MissingField("category name"));
        }
        let category = Category::new(name);
        self.categories.push(category.clone());
        self.repository.append_category(name)?;
        info!("registered category {:?}", name);
        Ok(category)
    }

    /// The existing category with this name, or a newly registered and
    /// persisted one.
    pub fn find_or_create(&mut self, name: &str) -> Result<Category, TrackerError> {
        if let Some(existing) = self.categories.iter().find(|c| c.name == name) {
            return Ok(existing.clone());
        }
        let category = Category::new(name);
        self.categories.push(category.clone());
        self.repository.append_category(name)?;
        info!("auto-registered category {:?}", name);
        Ok(category)
    }
}
