//! Domain building blocks for the Ceral Peyzaj portfolio backend.
//!
//! Everything in this crate is pure logic: project categories, the editor
//! form and its validation, media key naming, catalog filtering, and the
//! gallery navigator. Persistence and blob storage live in `ceral-db` and
//! `ceral-media`.

pub mod catalog;
pub mod category;
pub mod error;
pub mod form;
pub mod gallery;
pub mod media;
pub mod types;
