mod postgres_image_repository;

pub use postgres_image_repository::PostgresImageRepository;
