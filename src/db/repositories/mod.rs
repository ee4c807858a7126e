//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod draft_repo;
pub mod submission_repo;

pub use draft_repo::DraftRepository;
pub use submission_repo::SubmissionRepository;
