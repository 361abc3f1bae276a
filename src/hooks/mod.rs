pub mod use_advice;
pub mod use_submission;
