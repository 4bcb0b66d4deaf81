pub mod error;
pub mod logger;
pub mod quote;
pub mod validation;
