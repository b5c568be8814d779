use crate::{
    model::search::SearchResultsDto,
    server::model::{customer::Customer, location::LocationMatch, product::Product},
};

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub word: String,
    pub customers: Vec<Customer>,
    pub locations: Vec<LocationMatch>,
    pub products: Vec<Product>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            word: self.word,
            customers: self.customers.into_iter().map(Customer::into_dto).collect(),
            locations: self
                .locations
                .into_iter()
                .map(LocationMatch::into_dto)
                .collect(),
            products: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }
}
