pub mod cart;

pub use cart::{
    AddCartItemInput, AddCartItemUseCase, CartError, ClearCartUseCase, ListCartItemsUseCase,
    RemoveCartItemUseCase, UpdateCartItemUseCase,
};
