use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub version: String,
    pub adviser: Option<String>,
}

/// Minimal product reference used inside other payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRefDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListItemDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub module_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub modules: Vec<ModuleDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveProductDto {
    pub name: String,
    pub category: String,
    pub version: String,
    pub adviser: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModuleDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveModuleDto {
    pub product_id: i32,
    pub name: String,
}
