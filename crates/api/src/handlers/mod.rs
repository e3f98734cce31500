pub mod health;
pub mod network;

pub use health::health_check;
