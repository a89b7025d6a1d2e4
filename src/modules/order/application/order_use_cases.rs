use std::sync::Arc;

use crate::order::application::ports::incoming::use_cases::{
    GetOrderUseCase, ListAllOrdersUseCase, ListCustomerOrdersUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub place: Arc<dyn PlaceOrderUseCase + Send + Sync>,
    pub get: Arc<dyn GetOrderUseCase + Send + Sync>,
    pub list_for_customer: Arc<dyn ListCustomerOrdersUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllOrdersUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
}
