pub mod advice;
