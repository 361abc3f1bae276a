pub mod advice;
pub mod error;
pub mod form;
