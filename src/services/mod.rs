pub mod item_service;
pub mod shopcart_service;
