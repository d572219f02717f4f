use super::subs::SubCommands;
use clap::Parser;
use sparkjob_lib::job::JAR_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, author, about)]
pub struct Opts {
    #[arg(
        long,
        global = true,
        help = "Directory sbt is run from",
        env = "SPARKJOB_PROJECT_DIR",
        value_name = "DIR",
        default_value = ".."
    )]
    pub project_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Directory the packaged JAR is written to",
        env = "SPARKJOB_JAR_DIR",
        value_name = "DIR",
        default_value = "./target/scala-2.10/"
    )]
    pub jar_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "File name of the packaged JAR",
        env = "SPARKJOB_JAR_NAME",
        value_name = "NAME",
        default_value = JAR_FILE
    )]
    pub jar_name: String,
    #[command(subcommand)]
    pub commands: SubCommands,
}
