//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` and the configured [`StoreNames`](crate::StoreNames). Methods
//! backed by a stored procedure return the procedure's JSON result untouched.

pub mod action_repo;
pub mod assessment_repo;
pub mod chat_message_repo;
pub mod criterion_repo;
pub mod program_repo;
pub mod response_repo;
pub mod results_repo;

pub use action_repo::ActionRepo;
pub use assessment_repo::AssessmentRepo;
pub use chat_message_repo::ChatMessageRepo;
pub use criterion_repo::CriterionRepo;
pub use program_repo::ProgramRepo;
pub use response_repo::ResponseRepo;
pub use results_repo::ResultsRepo;
