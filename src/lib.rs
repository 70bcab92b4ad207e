//! # ImageVault - PNG Image Store
//!
//! A small HTTP service that keeps PNG images in an object store bucket and
//! their metadata in PostgreSQL, built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business logic (entities, value objects, domain errors)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: Adapters for object storage and persistence
//! - **API**: HTTP handlers and middleware
//!
//! ## Endpoints
//!
//! - `GET /images` lists every stored image
//! - `POST /images` uploads a PNG (multipart `name` + `file`)
//! - `GET /images/{id}` returns one image's metadata
//! - `DELETE /images/{id}` removes the blob and its metadata
//! - `/public/*` serves static files
//!
//! ## Example Usage
//!
//! ```no_run
//! use image_vault::{create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let state = ApplicationBuilder::new(config)
//!     .with_database()
//!     .await?
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use api::{create_router, router::AppState};
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
