use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    list_users::UserPage,
    login::LoginRequestDto,
    reset_password::{PasswordResetResponse, ResetPasswordRequestDto},
    signup::{AdminSignupRequestDto, SignupRequestDto},
};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::LoginUserOutput;
use crate::auth::application::ports::outgoing::UserRecord;
use crate::cart::adapter::incoming::web::routes::cart::{
    AddCartItemRequestDto, UpdateCartItemRequestDto,
};
use crate::cart::application::ports::outgoing::CartItemRecord;
use crate::catalog::adapter::incoming::web::routes::{
    categories::{CategoryPage, CategoryRequestDto},
    products::{ProductPage, ProductRequestDto},
};
use crate::catalog::application::ports::outgoing::{CategoryRecord, ProductRecord};
use crate::order::adapter::incoming::web::routes::{
    list_orders::OrderPage, place_order::PlaceOrderRequestDto,
    update_order_status::UpdateOrderStatusRequestDto,
};
use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::outgoing::{OrderDetails, OrderItemRecord, OrderRecord};
use crate::shared::api::{ApiError, Deleted};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Backend API",
        version = "1.0.0",
        description = "Catalog, cart and order API for the shop",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::user_signup_handler,
        crate::auth::adapter::incoming::web::routes::admin_signup_handler,
        crate::auth::adapter::incoming::web::routes::user_login_handler,
        crate::auth::adapter::incoming::web::routes::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::get_me_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::list_categories_handler,
        crate::catalog::adapter::incoming::web::routes::create_category_handler,
        crate::catalog::adapter::incoming::web::routes::update_category_handler,
        crate::catalog::adapter::incoming::web::routes::delete_category_handler,
        crate::catalog::adapter::incoming::web::routes::list_products_handler,
        crate::catalog::adapter::incoming::web::routes::get_product_handler,
        crate::catalog::adapter::incoming::web::routes::create_product_handler,
        crate::catalog::adapter::incoming::web::routes::update_product_handler,
        crate::catalog::adapter::incoming::web::routes::delete_product_handler,

        // Cart endpoints
        crate::cart::adapter::incoming::web::routes::list_cart_handler,
        crate::cart::adapter::incoming::web::routes::add_cart_item_handler,
        crate::cart::adapter::incoming::web::routes::update_cart_item_handler,
        crate::cart::adapter::incoming::web::routes::clear_cart_handler,
        crate::cart::adapter::incoming::web::routes::remove_cart_item_handler,

        // Order endpoints
        crate::order::adapter::incoming::web::routes::place_order_handler,
        crate::order::adapter::incoming::web::routes::get_order_handler,
        crate::order::adapter::incoming::web::routes::list_my_orders_handler,
        crate::order::adapter::incoming::web::routes::list_all_orders_handler,
        crate::order::adapter::incoming::web::routes::update_order_status_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            ApiError,
            Deleted,

            // Auth
            UserRole,
            UserRecord,
            UserPage,
            SignupRequestDto,
            AdminSignupRequestDto,
            LoginRequestDto,
            LoginUserOutput,
            ResetPasswordRequestDto,
            PasswordResetResponse,

            // Catalog
            CategoryRecord,
            CategoryRequestDto,
            CategoryPage,
            ProductRecord,
            ProductRequestDto,
            ProductPage,

            // Cart
            CartItemRecord,
            AddCartItemRequestDto,
            UpdateCartItemRequestDto,

            // Orders
            OrderStatus,
            OrderRecord,
            OrderItemRecord,
            OrderDetails,
            OrderPage,
            PlaceOrderRequestDto,
            UpdateOrderStatusRequestDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "catalog", description = "Category and product endpoints"),
        (name = "cart", description = "Shopping cart endpoints"),
        (name = "orders", description = "Checkout and order management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
