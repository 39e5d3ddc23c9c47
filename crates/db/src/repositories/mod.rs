//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod field_option_repo;
pub mod form_repo;
pub mod question_repo;

pub use field_option_repo::FieldOptionRepo;
pub use form_repo::FormRepo;
pub use question_repo::QuestionRepo;
