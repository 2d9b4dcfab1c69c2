pub mod error;
pub mod guard;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod token;

pub use error::*;
pub use guard::*;
pub use middleware::*;
pub use models::*;
pub use repository::*;
pub use token::*;
