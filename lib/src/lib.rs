//! Packaging, upload and launch of the Schema Guru Spark job on Amazon EMR.

pub mod emr;
pub mod error;
pub mod job;
pub mod location;
pub mod s3;
pub mod sbt;
pub mod types;

pub use error::Error;
