use sea_orm_migration::prelude::*;

/// `cargo run -p migration -- up|down|status|fresh`, reading `DATABASE_URL`.
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
