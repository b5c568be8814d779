use sea_orm::DatabaseConnection;

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::search::SearchResults,
    service::{
        customer::CustomerService, location::LocationService,
        software_product::SoftwareProductService,
    },
};

const WORD_MIN: usize = 3;
const WORD_MAX: usize = 64;

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds customers, locations and products containing `word`.
    pub async fn search(&self, word: &str) -> Result<SearchResults, AppError> {
        let word = word.trim();
        let length = word.chars().count();
        if !(WORD_MIN..=WORD_MAX).contains(&length) {
            return Err(ValidationError::SearchTermLength.into());
        }

        let customers = CustomerService::new(self.db).filter(word, true).await?;
        let locations = LocationService::new(self.db)
            .filter_by_name(word, true)
            .await?;
        let products = SoftwareProductService::new(self.db).filter(word).await?;

        Ok(SearchResults {
            word: word.to_string(),
            customers,
            locations,
            products,
        })
    }
}
