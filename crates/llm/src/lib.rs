//! Client for the external form generation capability.
//!
//! Talks to any OpenAI-compatible chat-completions endpoint and exposes it to
//! the pipeline as a [`FormGenerator`](formgen_core::generation::FormGenerator).
//!
//! - [`config`] -- endpoint, credentials, model and timeout from the environment.
//! - [`api`] -- thin HTTP wrapper over `POST /chat/completions`.
//! - [`prompt`] -- the instructions sent alongside the user's description.
//! - [`generator`] -- [`LlmFormGenerator`](generator::LlmFormGenerator).

pub mod api;
pub mod config;
pub mod generator;
pub mod prompt;

pub use config::LlmConfig;
pub use generator::LlmFormGenerator;
