pub mod cart_repository;

pub use cart_repository::{CartItemRecord, CartRepository, CartRepositoryError, NewCartItem};
