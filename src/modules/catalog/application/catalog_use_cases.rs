use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, CreateProductUseCase, DeleteCategoryUseCase, DeleteProductUseCase,
    GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase, UpdateCategoryUseCase,
    UpdateProductUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_categories: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub create_category: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub update_category: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete_category: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    pub list_products: Arc<dyn ListProductsUseCase + Send + Sync>,
    pub get_product: Arc<dyn GetProductUseCase + Send + Sync>,
    pub create_product: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub update_product: Arc<dyn UpdateProductUseCase + Send + Sync>,
    pub delete_product: Arc<dyn DeleteProductUseCase + Send + Sync>,
}
