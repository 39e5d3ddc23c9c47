//! Domain types and rules shared by every formgen crate.
//!
//! - [`types`] -- primary key and timestamp aliases.
//! - [`error`] -- the [`CoreError`](error::CoreError) taxonomy.
//! - [`form`] -- the closed field-type enumeration and form-tree validation.
//! - [`generation`] -- the [`FormGenerator`](generation::FormGenerator) seam for
//!   the external text-to-form capability.
//! - [`dialog`] -- the creation-dialog state machine.

pub mod dialog;
pub mod error;
pub mod form;
pub mod generation;
pub mod types;
