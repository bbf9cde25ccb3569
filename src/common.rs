pub mod error;
pub mod formatters;
pub mod nullable;
pub mod validators;
