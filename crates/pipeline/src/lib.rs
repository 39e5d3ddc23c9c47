//! Form generation pipeline.
//!
//! Turns a natural-language description into a persisted form tree:
//!
//! 1. validate the request ([`formgen_core::form::validate_description`]),
//! 2. ask the [`FormGenerator`](formgen_core::generation::FormGenerator) for a
//!    candidate tree,
//! 3. parse it leniently ([`candidate`]) and normalize it onto the closed
//!    field-type enumeration ([`normalize`]),
//! 4. write it atomically with
//!    [`FormRepo::create_tree`](formgen_db::repositories::FormRepo::create_tree).

pub mod candidate;
pub mod normalize;
pub mod pipeline;

pub use pipeline::{GenerationPipeline, GenerationResult};
