use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, ListUsersError, ListUsersUseCase, LoginUserError,
    LoginUserInput, LoginUserOutput, LoginUserUseCase, ResetPasswordError, ResetPasswordUseCase,
    SignupUserError, SignupUserInput, SignupUserUseCase,
};
use crate::auth::application::ports::outgoing::{UserListFilter, UserRecord};
use crate::cart::application::ports::incoming::use_cases::{
    AddCartItemInput, AddCartItemUseCase, CartError, ClearCartUseCase, ListCartItemsUseCase,
    RemoveCartItemUseCase, UpdateCartItemUseCase,
};
use crate::cart::application::ports::outgoing::CartItemRecord;
use crate::catalog::application::ports::incoming::use_cases::{
    CategoryError, CreateCategoryUseCase, CreateProductUseCase, DeleteCategoryUseCase,
    DeleteProductUseCase, GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase,
    ProductError, UpdateCategoryUseCase, UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{
    CategoryData, CategoryRecord, ProductData, ProductRecord,
};
use crate::order::application::ports::incoming::use_cases::{
    GetOrderUseCase, ListAllOrdersUseCase, ListCustomerOrdersUseCase, OrderQueryUseCaseError,
    PlaceOrderError, PlaceOrderInput, PlaceOrderUseCase, Requester, UpdateOrderStatusError,
    UpdateOrderStatusUseCase,
};
use crate::order::application::ports::outgoing::{OrderDetails, OrderRecord};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Auth
// ============================================================================

#[derive(Default, Clone)]
pub struct StubAuth;

#[async_trait]
impl SignupUserUseCase for StubAuth {
    async fn execute(&self, _input: SignupUserInput) -> Result<UserRecord, SignupUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl LoginUserUseCase for StubAuth {
    async fn execute(
        &self,
        _input: LoginUserInput,
        _accepted_roles: &[UserRole],
    ) -> Result<LoginUserOutput, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProfileUseCase for StubAuth {
    async fn execute(&self, _user_id: UserId) -> Result<UserRecord, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListUsersUseCase for StubAuth {
    async fn execute(
        &self,
        _filter: UserListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<UserRecord>, ListUsersError> {
        Ok(PageResult::empty())
    }
}

#[async_trait]
impl ResetPasswordUseCase for StubAuth {
    async fn execute(
        &self,
        _user_id: UserId,
        _new_password: String,
    ) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCatalog;

#[async_trait]
impl ListCategoriesUseCase for StubCatalog {
    async fn execute(
        &self,
        _name: Option<String>,
        _page: PageRequest,
    ) -> Result<PageResult<CategoryRecord>, CategoryError> {
        Ok(PageResult::empty())
    }
}

#[async_trait]
impl CreateCategoryUseCase for StubCatalog {
    async fn execute(&self, _data: CategoryData) -> Result<CategoryRecord, CategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateCategoryUseCase for StubCatalog {
    async fn execute(
        &self,
        _id: Uuid,
        _data: CategoryData,
    ) -> Result<CategoryRecord, CategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteCategoryUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), CategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListProductsUseCase for StubCatalog {
    async fn execute(
        &self,
        _name: Option<String>,
        _page: PageRequest,
    ) -> Result<PageResult<ProductRecord>, ProductError> {
        Ok(PageResult::empty())
    }
}

#[async_trait]
impl GetProductUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<ProductRecord, ProductError> {
        Err(ProductError::NotFound)
    }
}

#[async_trait]
impl CreateProductUseCase for StubCatalog {
    async fn execute(&self, _data: ProductData) -> Result<ProductRecord, ProductError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProductUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid, _data: ProductData) -> Result<ProductRecord, ProductError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProductUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), ProductError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Cart
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCart;

#[async_trait]
impl ListCartItemsUseCase for StubCart {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<CartItemRecord>, CartError> {
        Ok(vec![])
    }
}

#[async_trait]
impl AddCartItemUseCase for StubCart {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: AddCartItemInput,
    ) -> Result<CartItemRecord, CartError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateCartItemUseCase for StubCart {
    async fn execute(
        &self,
        _user_id: UserId,
        _item_id: Uuid,
        _quantity: i32,
    ) -> Result<CartItemRecord, CartError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RemoveCartItemUseCase for StubCart {
    async fn execute(&self, _user_id: UserId, _item_id: Uuid) -> Result<(), CartError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ClearCartUseCase for StubCart {
    async fn execute(&self, _user_id: UserId) -> Result<u64, CartError> {
        Ok(0)
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Default, Clone)]
pub struct StubOrders;

#[async_trait]
impl PlaceOrderUseCase for StubOrders {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: PlaceOrderInput,
    ) -> Result<OrderDetails, PlaceOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetOrderUseCase for StubOrders {
    async fn execute(
        &self,
        _requester: Requester,
        _order_id: Uuid,
    ) -> Result<OrderDetails, OrderQueryUseCaseError> {
        Err(OrderQueryUseCaseError::NotFound)
    }
}

#[async_trait]
impl ListCustomerOrdersUseCase for StubOrders {
    async fn execute(
        &self,
        _user_id: UserId,
        _page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError> {
        Ok(PageResult::empty())
    }
}

#[async_trait]
impl ListAllOrdersUseCase for StubOrders {
    async fn execute(
        &self,
        _page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError> {
        Ok(PageResult::empty())
    }
}

#[async_trait]
impl UpdateOrderStatusUseCase for StubOrders {
    async fn execute(
        &self,
        _order_id: Uuid,
        _status: &str,
    ) -> Result<OrderRecord, UpdateOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}
