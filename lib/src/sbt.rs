use std::path::Path;
use std::process::{Command, Stdio};

use execute::Execute;
use log::info;

use crate::error::Error;

pub const PROJECT: &str = "schema-guru-sparkjob";

pub fn test(project_dir: &Path) -> Result<(), Error> {
    sbt(project_dir, "test")
}

/// Build the fat JAR.
pub fn package(project_dir: &Path) -> Result<(), Error> {
    sbt(project_dir, "assembly")
}

fn sbt(project_dir: &Path, task: &str) -> Result<(), Error> {
    let mut command = Command::new("sbt");
    command
        .current_dir(project_dir)
        .arg(format!("project {}", PROJECT))
        .arg(task);
    handle_command_error(command)
}

fn handle_command_error(mut command: Command) -> Result<(), Error> {
    info!("run: {:?}", command);
    command.stderr(Stdio::piped());

    let output = command.execute_output()?;
    match output.status.code() {
        Some(0) => Ok(()),
        Some(status) => Err(Error::Command {
            command: format!("{:?}", command),
            status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
        None => Err(Error::Interrupted(format!("{:?}", command))),
    }
}
