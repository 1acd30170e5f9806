//! Startup records, their field types and the in-memory book.

pub mod book;
pub mod fields;
pub mod startup;

pub use book::{BookError, StartupBook};
pub use fields::{
    Address, ConstraintViolation, Email, FundingStage, Industry, Name, Phone, Tag, Valuation,
};
pub use startup::Startup;
