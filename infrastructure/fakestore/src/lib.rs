pub mod cart_gateway;
pub mod client;
pub mod dto;
pub mod fixture;
pub mod product_gateway;
