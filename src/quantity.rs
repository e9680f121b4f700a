pub mod price;
pub mod spend;
pub mod volume;

pub use self::{price::UnitPrice, spend::Spend, volume::Liters};
