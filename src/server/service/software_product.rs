use sea_orm::DatabaseConnection;

use crate::server::{
    data::software_product::SoftwareProductRepository,
    error::AppError,
    model::product::{
        Module, Product, ProductListItem, ProductWithModules, SaveProductParams,
    },
    util::validate,
};

const NAME_MAX: usize = 64;
const CATEGORY_MAX: usize = 64;
pub const VERSION_MAX: usize = 16;
const ADVISER_MAX: usize = 64;

pub struct SoftwareProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoftwareProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all products with their module counts.
    pub async fn list(&self) -> Result<Vec<ProductListItem>, AppError> {
        let products = SoftwareProductRepository::new(self.db)
            .get_all_with_module_count()
            .await?;

        Ok(products
            .into_iter()
            .map(|(product, module_count)| ProductListItem {
                product: Product::from_entity(product),
                module_count,
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<ProductWithModules, AppError> {
        let (product, modules) = SoftwareProductRepository::new(self.db)
            .get_with_modules(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Produkt nicht gefunden.".to_string()))?;

        Ok(ProductWithModules {
            product: Product::from_entity(product),
            modules: modules.into_iter().map(Module::from_entity).collect(),
        })
    }

    pub async fn create(&self, params: SaveProductParams) -> Result<Product, AppError> {
        Self::validate(&params)?;

        let product = SoftwareProductRepository::new(self.db).create(params).await?;

        tracing::info!("Created product {} '{}'", product.id, product.name);

        Ok(Product::from_entity(product))
    }

    pub async fn update(&self, id: i32, params: SaveProductParams) -> Result<Product, AppError> {
        Self::validate(&params)?;

        let product = SoftwareProductRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Produkt nicht gefunden.".to_string()))?;

        Ok(Product::from_entity(product))
    }

    /// Deletes a product with its modules, licenses, used products and updates.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SoftwareProductRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Produkt nicht gefunden.".to_string()));
        }

        tracing::info!("Deleted product {}", id);

        Ok(())
    }

    pub async fn filter(&self, word: &str) -> Result<Vec<Product>, AppError> {
        let products = SoftwareProductRepository::new(self.db)
            .filter(word.trim())
            .await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    fn validate(params: &SaveProductParams) -> Result<(), AppError> {
        validate::required(&params.name, "Name", NAME_MAX)?;
        validate::required(&params.category, "Kategorie", CATEGORY_MAX)?;
        validate::required(&params.version, "Version", VERSION_MAX)?;
        if let Some(adviser) = &params.adviser {
            validate::max_len(adviser, "Betreuer", ADVISER_MAX)?;
        }

        Ok(())
    }
}
