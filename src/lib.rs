pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use config::*;
pub use models::*;
pub use services::*;
pub use store::*;
pub use utils::*;
