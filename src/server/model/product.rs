//! Software product and module models.

use crate::model::product::{
    ModuleDto, ProductDetailDto, ProductDto, ProductListItemDto, SaveModuleDto, SaveProductDto,
};

#[derive(Debug, Clone)]
pub struct SaveProductParams {
    pub name: String,
    pub category: String,
    pub version: String,
    pub adviser: Option<String>,
}

impl SaveProductParams {
    pub fn from_dto(dto: SaveProductDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            category: dto.category.trim().to_string(),
            version: dto.version.trim().to_string(),
            adviser: dto
                .adviser
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub version: String,
    pub adviser: Option<String>,
}

impl Product {
    pub fn from_entity(entity: entity::software_product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            version: entity.version,
            adviser: entity.adviser,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            category: self.category,
            version: self.version,
            adviser: self.adviser,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductListItem {
    pub product: Product,
    pub module_count: u64,
}

impl ProductListItem {
    pub fn into_dto(self) -> ProductListItemDto {
        ProductListItemDto {
            product: self.product.into_dto(),
            module_count: self.module_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductWithModules {
    pub product: Product,
    pub modules: Vec<Module>,
}

impl ProductWithModules {
    pub fn into_dto(self) -> ProductDetailDto {
        ProductDetailDto {
            product: self.product.into_dto(),
            modules: self.modules.into_iter().map(Module::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveModuleParams {
    pub product_id: i32,
    pub name: String,
}

impl SaveModuleParams {
    pub fn from_dto(dto: SaveModuleDto) -> Self {
        Self {
            product_id: dto.product_id,
            name: dto.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
}

impl Module {
    pub fn from_entity(entity: entity::software_module::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ModuleDto {
        ModuleDto {
            id: self.id,
            product_id: self.product_id,
            name: self.name,
        }
    }
}
