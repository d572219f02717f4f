//! Assembly of the Schema Derive job flow.

use crate::types::{ActionOnFailure, BootstrapAction, JobSpec, Step};

pub const JOB_NAME: &str = "Schema Derive Spark";
pub const JAR_FILE: &str = "schema-guru-sparkjob-0.6.1";
pub const ARTIFACT_PREFIX: &str = "s3://snowplow-hosted-assets/schema-guru/spark/";
pub const MAIN_CLASS: &str = "com.snowplowanalytics.schemaguru.sparkjob.SchemaDeriveJob";

pub const INSTANCE_TYPE: &str = "m3.xlarge";
pub const INSTANCE_COUNT: i32 = 3;
pub const AMI_VERSION: &str = "3.8";
pub const JOB_FLOW_ROLE: &str = "EMR_EC2_DefaultRole";
pub const SERVICE_ROLE: &str = "EMR_DefaultRole";

const SPARK_SUBMIT: &str = "/home/hadoop/spark/bin/spark-submit";
const INSTALL_SPARK: &str = "s3://support.elasticmapreduce/spark/install-spark";
const SCRIPT_RUNNER_JAR: &str = "s3://us-east-1.elasticmapreduce/libs/script-runner/script-runner.jar";
const HIVE_BASE: &str = "s3://us-east-1.elasticmapreduce/libs/hive/";

fn script_runner_step(name: &str, jar: String, args: Vec<String>) -> Step {
    Step {
        name: name.to_string(),
        jar,
        args,
        action_on_failure: ActionOnFailure::TerminateJobFlow,
    }
}

pub fn install_hive_step() -> Step {
    script_runner_step(
        "Install Hive",
        SCRIPT_RUNNER_JAR.to_string(),
        vec![
            format!("{}hive-script", HIVE_BASE),
            "--base-path".to_string(),
            HIVE_BASE.to_string(),
            "--install-hive".to_string(),
            "--hive-versions".to_string(),
            "latest".to_string(),
        ],
    )
}

/// The step EMR runs first when debugging is enabled. Unlike the others it
/// lives in the job flow's own region.
pub fn debugging_step(region: &str) -> Step {
    script_runner_step(
        "Setup Hadoop Debugging",
        format!(
            "s3://{}.elasticmapreduce/libs/script-runner/script-runner.jar",
            region
        ),
        vec![format!(
            "s3://{}.elasticmapreduce/libs/state-pusher/0.1/fetch",
            region
        )],
    )
}

/// Arguments of the spark-submit invocation. The remote runner reads them
/// positionally, so the order is fixed.
pub fn schema_derive_args(input_path: &str, output_path: &str, errors_path: &str) -> Vec<String> {
    vec![
        SPARK_SUBMIT.to_string(),
        "--deploy-mode".to_string(),
        "cluster".to_string(),
        "--master".to_string(),
        "yarn-cluster".to_string(),
        "--class".to_string(),
        MAIN_CLASS.to_string(),
        format!("{}{}", ARTIFACT_PREFIX, JAR_FILE),
        // one JSON document per line in the input files
        "--ndjson".to_string(),
        "--errors-path".to_string(),
        format!("s3n://{}", errors_path),
        "--output".to_string(),
        format!("s3n://{}", output_path),
        format!("s3n://{}", input_path),
    ]
}

/// Build the job flow for one run.
///
/// Paths are given without a scheme and are only prefixed. EMR needs a
/// trailing slash on `output_path` and `errors_path`; they are passed on
/// as they are.
pub fn build_job_spec(
    input_path: &str,
    output_path: &str,
    errors_path: &str,
    log_path: &str,
    ssh_key_name: &str,
) -> JobSpec {
    let bootstrap_actions = vec![BootstrapAction {
        name: "Install Spark".to_string(),
        path: INSTALL_SPARK.to_string(),
        args: vec!["-x".to_string()],
    }];

    let steps = vec![
        install_hive_step(),
        script_runner_step(
            "Run SchemaDeriveJob",
            SCRIPT_RUNNER_JAR.to_string(),
            schema_derive_args(input_path, output_path, errors_path),
        ),
    ];

    JobSpec {
        name: JOB_NAME.to_string(),
        log_uri: format!("s3://{}", log_path),
        ec2_key_name: ssh_key_name.to_string(),
        master_instance_type: INSTANCE_TYPE.to_string(),
        slave_instance_type: INSTANCE_TYPE.to_string(),
        instance_count: INSTANCE_COUNT,
        ami_version: AMI_VERSION.to_string(),
        enable_debugging: true,
        job_flow_role: JOB_FLOW_ROLE.to_string(),
        service_role: SERVICE_ROLE.to_string(),
        bootstrap_actions,
        steps,
    }
}
