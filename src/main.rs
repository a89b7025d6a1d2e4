pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, cart, catalog, order};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{
    Argon2Hasher, BcryptHasher, MigratingPasswordHasher,
};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::service::bootstrap_admin::bootstrap_admin;
use crate::auth::application::service::{
    CredentialStore, GetProfileService, ListUsersService, LoginUserService, ResetPasswordService,
    SignupUserService,
};

use crate::cart::adapter::outgoing::CartRepositoryPostgres;
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::service::CartService;

use crate::catalog::adapter::outgoing::{
    CatalogQueryPostgres, CategoryRepositoryPostgres, ProductRepositoryPostgres,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::service::{
    CatalogQueryService, CategoryCommandService, ProductCommandService,
};

use crate::order::adapter::outgoing::{
    OrderQueryPostgres, OrderRepositoryPostgres, OrderTransactionPostgres,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::service::{
    OrderQueryService, PlaceOrderService, UpdateOrderStatusService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{load_dotenv, AppConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub catalog: CatalogUseCases,
    pub cart: CartUseCases,
    pub order: OrderUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = load_dotenv();
    info!(environment = %env_name, "Starting application...");

    let config = AppConfig::from_env().context("invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("failed to connect to database")?,
    );

    if config.run_migrations {
        Migrator::up(db_arc.as_ref(), None)
            .await
            .context("failed to run migrations")?;
        info!("migrations applied");
    }

    // Auth
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let hasher = MigratingPasswordHasher::new(
        Argon2Hasher::from_env(config.is_production()),
        BcryptHasher::default(),
    );
    let credentials = CredentialStore::new(
        Arc::new(user_repo),
        Arc::new(user_query.clone()),
        Arc::new(hasher),
    );

    let auth = AuthUseCases {
        signup: Arc::new(SignupUserService::new(credentials.clone())),
        login: Arc::new(LoginUserService::new(
            credentials.clone(),
            Arc::clone(&token_provider_arc),
        )),
        get_profile: Arc::new(GetProfileService::new(user_query.clone())),
        list_users: Arc::new(ListUsersService::new(user_query)),
        reset_password: Arc::new(ResetPasswordService::new(credentials)),
    };

    if let Some(admin) = &config.admin_bootstrap {
        bootstrap_admin(auth.signup.as_ref(), admin)
            .await
            .context("failed to bootstrap administrator")?;
    }

    // Catalog
    let catalog_query = Arc::new(CatalogQueryService::new(CatalogQueryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let categories = Arc::new(CategoryCommandService::new(
        CategoryRepositoryPostgres::new(Arc::clone(&db_arc)),
    ));
    let products = Arc::new(ProductCommandService::new(ProductRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));

    let catalog = CatalogUseCases {
        list_categories: catalog_query.clone(),
        create_category: categories.clone(),
        update_category: categories.clone(),
        delete_category: categories,
        list_products: catalog_query.clone(),
        get_product: catalog_query,
        create_product: products.clone(),
        update_product: products.clone(),
        delete_product: products,
    };

    // Cart
    let cart_service = Arc::new(CartService::new(CartRepositoryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let cart = CartUseCases {
        list: cart_service.clone(),
        add: cart_service.clone(),
        update: cart_service.clone(),
        remove: cart_service.clone(),
        clear: cart_service,
    };

    // Orders
    let order_query = Arc::new(OrderQueryService::new(OrderQueryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let order = OrderUseCases {
        place: Arc::new(PlaceOrderService::new(
            OrderTransactionPostgres::new(Arc::clone(&db_arc)),
            config.allow_empty_cart_checkout,
        )),
        get: order_query.clone(),
        list_for_customer: order_query.clone(),
        list_all: order_query,
        update_status: Arc::new(UpdateOrderStatusService::new(
            OrderRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
    };

    let state = AppState {
        auth,
        catalog,
        cart,
        order,
    };

    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::user_signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::user_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_me_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_categories_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_category_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_category_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_product_handler);
    // Cart (`/item/all` must win over `/item/{id}`)
    cfg.service(crate::cart::adapter::incoming::web::routes::list_cart_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::add_cart_item_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::update_cart_item_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::clear_cart_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::remove_cart_item_handler);
    // Orders
    cfg.service(crate::order::adapter::incoming::web::routes::place_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::update_order_status_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::list_my_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::list_all_orders_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
