use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum SubCommands {
    /// Run the job's tests with sbt
    Test,
    /// Build the job's fat JAR with sbt
    Package,
    Upload(Upload),
    Run(Run),
}

#[derive(Args)]
#[command(about = "Upload the packaged JAR to <BUCKET>/jar/")]
pub struct Upload {
    #[arg(help = "AWS profile to authenticate with")]
    pub profile: String,
    #[arg(help = "bucket to upload to")]
    pub bucket: String,
}

#[derive(Args)]
#[command(about = "Launch an EMR job flow deriving schemas from <INPUT>")]
pub struct Run {
    #[arg(help = "AWS profile to authenticate with")]
    pub profile: String,
    #[arg(help = "input path, without scheme: bucket/prefix")]
    pub input: String,
    #[arg(help = "output path, needs a trailing slash")]
    pub output: String,
    #[arg(help = "path for invalid instances, needs a trailing slash")]
    pub errors: String,
    #[arg(help = "path EMR writes its logs to")]
    pub log: String,
    #[arg(help = "EC2 key pair for SSH access to the cluster", value_name = "SSH_KEY")]
    pub ssh_key: String,
    #[arg(
        long,
        help = "region to launch in instead of the input bucket's",
        env = "SPARKJOB_REGION",
        value_name = "REGION"
    )]
    pub region: Option<String>,
    #[arg(long, help = "print the job flow instead of launching it")]
    pub dry_run: bool,
    #[arg(long, short, help = "with --dry-run: output as JSON", requires = "dry_run")]
    pub json: bool,
}
