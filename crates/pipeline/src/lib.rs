//! Project content lifecycle.
//!
//! - [`publish::Publisher`] runs the create / edit / delete workflow:
//!   validate, upload pending media, persist the record.
//! - [`catalog::Catalog`] is the read side: newest-first listing, category
//!   filter, featured/regular split.
//! - [`session::EditorSession`] is the operator's in-progress form plus the
//!   pending upload batch, owned by the caller and mutated only on success.

pub mod catalog;
pub mod error;
pub mod publish;
pub mod repository;
pub mod session;

pub use catalog::Catalog;
pub use error::PipelineError;
pub use publish::{MediaCleanup, Publisher};
pub use repository::ProjectRepository;
pub use session::{EditorSession, UploadBatch};
