use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{customer::CustomerDto, location::LocationMatchDto, product::ProductDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub word: String,
    pub customers: Vec<CustomerDto>,
    pub locations: Vec<LocationMatchDto>,
    pub products: Vec<ProductDto>,
}
