pub mod category;
pub mod product;

pub use category::{
    CategoryError, CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};
pub use product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductError, UpdateProductUseCase,
};
