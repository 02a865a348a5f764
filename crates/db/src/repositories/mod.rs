//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every method is a
//! single statement, so each mutation is atomic on its own.

pub mod assessment_repo;
pub mod disorder_repo;
pub mod question_repo;
pub mod remedy_repo;

pub use assessment_repo::AssessmentRepo;
pub use disorder_repo::DisorderRepo;
pub use question_repo::QuestionRepo;
pub use remedy_repo::RemedyRepo;
