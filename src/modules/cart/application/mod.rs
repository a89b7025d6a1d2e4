pub mod cart_use_cases;
pub mod ports;
pub mod service;
