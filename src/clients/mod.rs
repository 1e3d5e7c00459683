pub mod judge0;

pub use judge0::{Judge0Client, JudgeError, SubmissionRequest};
