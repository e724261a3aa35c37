pub mod items;
pub mod shopcarts;

pub use items::Entity as Items;
pub use shopcarts::Entity as Shopcarts;
