//! Eco-Quest storage adapters for the `BlobStore` port.

pub mod file_blob_store;
pub mod memory_blob_store;
