use thiserror::Error;

use crate::location::Location;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{region} is not a known AWS location. Valid choices are:\n{choices}")]
    UnknownRegion { region: String, choices: String },
    #[error("no AWS region is known for location {0}")]
    UnknownLocation(Location),
    #[error("bucket {bucket} reports an unknown location constraint: {constraint:?}")]
    UnknownLocationConstraint { bucket: String, constraint: String },
    #[error("job flow submission failed")]
    Submission(#[source] BoxError),
    #[error("storage request failed")]
    Storage(#[source] BoxError),
    #[error("`{command}` exited with {status}: {stderr}")]
    Command {
        command: String,
        status: i32,
        stderr: String,
    },
    #[error("`{0}` was interrupted")]
    Interrupted(String),
    #[error("io error")]
    Io(#[from] std::io::Error),
}
