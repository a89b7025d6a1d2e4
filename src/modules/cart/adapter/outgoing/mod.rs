pub mod cart_repository_postgres;
pub mod sea_orm_entity;

pub use cart_repository_postgres::CartRepositoryPostgres;
