use std::sync::Arc;

use crate::cart::application::ports::incoming::use_cases::{
    AddCartItemUseCase, ClearCartUseCase, ListCartItemsUseCase, RemoveCartItemUseCase,
    UpdateCartItemUseCase,
};

#[derive(Clone)]
pub struct CartUseCases {
    pub list: Arc<dyn ListCartItemsUseCase + Send + Sync>,
    pub add: Arc<dyn AddCartItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCartItemUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveCartItemUseCase + Send + Sync>,
    pub clear: Arc<dyn ClearCartUseCase + Send + Sync>,
}
