pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod upload;

pub use delete::delete_handler;
pub use get::get_handler;
pub use health::{health_handler, readiness_handler};
pub use list::list_handler;
pub use upload::upload_handler;
