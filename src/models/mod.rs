pub mod auth;
pub mod category;
pub mod filter;
pub mod product;
pub mod query_key;
pub mod stats;
pub mod user;

pub use auth::{ApiMessage, AuthUser, LoginRequest};
pub use category::Category;
pub use filter::{FilterChange, FilterState};
pub use product::{DeletedProduct, Product, ProductPage};
pub use query_key::{KeySegment, QueryKey};
pub use stats::{ChartPoint, DashboardStats};
pub use user::UserPage;
