use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, ListUsersUseCase, LoginUserUseCase, ResetPasswordUseCase,
    SignupUserUseCase,
};
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::ports::incoming::use_cases::{
    AddCartItemUseCase, ClearCartUseCase, ListCartItemsUseCase, RemoveCartItemUseCase,
    UpdateCartItemUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, CreateProductUseCase, DeleteCategoryUseCase, DeleteProductUseCase,
    GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase, UpdateCategoryUseCase,
    UpdateProductUseCase,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::incoming::use_cases::{
    GetOrderUseCase, ListAllOrdersUseCase, ListCustomerOrdersUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};
use crate::tests::support::stubs::{StubAuth, StubCart, StubCatalog, StubOrders};
use crate::AppState;

/// Every use case starts as a stub; route tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    catalog: CatalogUseCases,
    cart: CartUseCases,
    order: OrderUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let auth = Arc::new(StubAuth);
        let catalog = Arc::new(StubCatalog);
        let cart = Arc::new(StubCart);
        let orders = Arc::new(StubOrders);

        Self {
            auth: AuthUseCases {
                signup: auth.clone(),
                login: auth.clone(),
                get_profile: auth.clone(),
                list_users: auth.clone(),
                reset_password: auth,
            },
            catalog: CatalogUseCases {
                list_categories: catalog.clone(),
                create_category: catalog.clone(),
                update_category: catalog.clone(),
                delete_category: catalog.clone(),
                list_products: catalog.clone(),
                get_product: catalog.clone(),
                create_product: catalog.clone(),
                update_product: catalog.clone(),
                delete_product: catalog,
            },
            cart: CartUseCases {
                list: cart.clone(),
                add: cart.clone(),
                update: cart.clone(),
                remove: cart.clone(),
                clear: cart,
            },
            order: OrderUseCases {
                place: orders.clone(),
                get: orders.clone(),
                list_for_customer: orders.clone(),
                list_all: orders.clone(),
                update_status: orders,
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_signup(mut self, uc: Arc<dyn SignupUserUseCase + Send + Sync>) -> Self {
        self.auth.signup = uc;
        self
    }

    pub fn with_login(mut self, uc: Arc<dyn LoginUserUseCase + Send + Sync>) -> Self {
        self.auth.login = uc;
        self
    }

    pub fn with_get_profile(mut self, uc: Arc<dyn GetProfileUseCase + Send + Sync>) -> Self {
        self.auth.get_profile = uc;
        self
    }

    pub fn with_list_users(mut self, uc: Arc<dyn ListUsersUseCase + Send + Sync>) -> Self {
        self.auth.list_users = uc;
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    ) -> Self {
        self.auth.reset_password = uc;
        self
    }

    // Catalog

    pub fn with_list_categories(
        mut self,
        uc: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.list_categories = uc;
        self
    }

    pub fn with_create_category(
        mut self,
        uc: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.create_category = uc;
        self
    }

    pub fn with_update_category(
        mut self,
        uc: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.update_category = uc;
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.delete_category = uc;
        self
    }

    pub fn with_list_products(mut self, uc: Arc<dyn ListProductsUseCase + Send + Sync>) -> Self {
        self.catalog.list_products = uc;
        self
    }

    pub fn with_get_product(mut self, uc: Arc<dyn GetProductUseCase + Send + Sync>) -> Self {
        self.catalog.get_product = uc;
        self
    }

    pub fn with_create_product(
        mut self,
        uc: Arc<dyn CreateProductUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.create_product = uc;
        self
    }

    pub fn with_update_product(
        mut self,
        uc: Arc<dyn UpdateProductUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.update_product = uc;
        self
    }

    pub fn with_delete_product(
        mut self,
        uc: Arc<dyn DeleteProductUseCase + Send + Sync>,
    ) -> Self {
        self.catalog.delete_product = uc;
        self
    }

    // Cart

    pub fn with_list_cart(mut self, uc: Arc<dyn ListCartItemsUseCase + Send + Sync>) -> Self {
        self.cart.list = uc;
        self
    }

    pub fn with_add_cart_item(mut self, uc: Arc<dyn AddCartItemUseCase + Send + Sync>) -> Self {
        self.cart.add = uc;
        self
    }

    pub fn with_update_cart_item(
        mut self,
        uc: Arc<dyn UpdateCartItemUseCase + Send + Sync>,
    ) -> Self {
        self.cart.update = uc;
        self
    }

    pub fn with_remove_cart_item(
        mut self,
        uc: Arc<dyn RemoveCartItemUseCase + Send + Sync>,
    ) -> Self {
        self.cart.remove = uc;
        self
    }

    pub fn with_clear_cart(mut self, uc: Arc<dyn ClearCartUseCase + Send + Sync>) -> Self {
        self.cart.clear = uc;
        self
    }

    // Orders

    pub fn with_place_order(mut self, uc: Arc<dyn PlaceOrderUseCase + Send + Sync>) -> Self {
        self.order.place = uc;
        self
    }

    pub fn with_get_order(mut self, uc: Arc<dyn GetOrderUseCase + Send + Sync>) -> Self {
        self.order.get = uc;
        self
    }

    pub fn with_list_customer_orders(
        mut self,
        uc: Arc<dyn ListCustomerOrdersUseCase + Send + Sync>,
    ) -> Self {
        self.order.list_for_customer = uc;
        self
    }

    pub fn with_list_all_orders(
        mut self,
        uc: Arc<dyn ListAllOrdersUseCase + Send + Sync>,
    ) -> Self {
        self.order.list_all = uc;
        self
    }

    pub fn with_update_order_status(
        mut self,
        uc: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
    ) -> Self {
        self.order.update_status = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            catalog: self.catalog,
            cart: self.cart,
            order: self.order,
        })
    }
}
