//! Blob storage for project media.
//!
//! [`BlobStore`] is the raw backend seam (filesystem or S3);
//! [`MediaStore`] sits on top of it and owns the project key convention,
//! public URLs and per-upload timeouts.

mod error;
mod traits;

pub mod filesystem;
pub mod s3;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use error::StorageError;
pub use store::{MediaFile, MediaStore, UploadedMedia};
pub use traits::BlobStore;
