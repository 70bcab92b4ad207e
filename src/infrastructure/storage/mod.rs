mod key_builder;
mod object_store_blob_store;

pub use key_builder::KeyBuilder;
pub use object_store_blob_store::ObjectStoreBlobStore;
