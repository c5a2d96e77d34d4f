//! Domain models

pub mod quest;
pub mod score;
pub mod submission;
pub mod user;

pub use quest::Quest;
pub use score::Score;
pub use submission::{Submission, SubmissionStatus};
pub use user::User;
