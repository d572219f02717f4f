//! Launching job flows on Amazon EMR.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_emr as emr;
use aws_sdk_emr::types::{
    BootstrapActionConfig, HadoopJarStepConfig, JobFlowInstancesConfig,
    ScriptBootstrapActionConfig, StepConfig,
};
use log::{debug, info};

use crate::error::Error;
use crate::job::debugging_step;
use crate::location::normalize_region;
use crate::types::{ActionOnFailure, BootstrapAction, JobSpec, Step};

#[async_trait]
pub trait JobFlows {
    /// Start a job flow and return the id EMR gave it.
    async fn run_job_flow(&self, spec: &JobSpec) -> Result<String, Error>;
}

pub struct EmrJobFlows {
    client: emr::Client,
    region: &'static str,
}

impl EmrJobFlows {
    /// Create a client for the EMR endpoint of `region`, authenticated with
    /// the named AWS profile.
    pub async fn connect(profile: &str, region: &str) -> Result<Self, Error> {
        let region = normalize_region(region)?;
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::from_static(region))
            .load()
            .await;

        Ok(Self {
            client: emr::Client::new(&config),
            region,
        })
    }
}

/// The steps actually sent to EMR for `spec` in `region`.
pub fn request_steps(spec: &JobSpec, region: &str) -> Vec<Step> {
    let mut steps = Vec::with_capacity(spec.steps.len() + 1);
    if spec.enable_debugging {
        steps.push(debugging_step(region));
    }
    steps.extend(spec.steps.iter().cloned());
    steps
}

fn jar_step_config(step: &Step) -> HadoopJarStepConfig {
    HadoopJarStepConfig::builder()
        .jar(&step.jar)
        .set_args(Some(step.args.clone()))
        .build()
}

fn step_config(step: &Step) -> StepConfig {
    StepConfig::builder()
        .name(&step.name)
        .action_on_failure(match step.action_on_failure {
            ActionOnFailure::TerminateJobFlow => emr::types::ActionOnFailure::TerminateJobFlow,
        })
        .hadoop_jar_step(jar_step_config(step))
        .build()
}

fn script_config(action: &BootstrapAction) -> ScriptBootstrapActionConfig {
    ScriptBootstrapActionConfig::builder()
        .path(&action.path)
        .set_args(Some(action.args.clone()))
        .build()
}

fn bootstrap_action_config(action: &BootstrapAction) -> BootstrapActionConfig {
    BootstrapActionConfig::builder()
        .name(&action.name)
        .script_bootstrap_action(script_config(action))
        .build()
}

#[async_trait]
impl JobFlows for EmrJobFlows {
    async fn run_job_flow(&self, spec: &JobSpec) -> Result<String, Error> {
        let steps = request_steps(spec, self.region)
            .iter()
            .map(step_config)
            .collect::<Vec<_>>();
        let bootstrap_actions = spec
            .bootstrap_actions
            .iter()
            .map(bootstrap_action_config)
            .collect::<Vec<_>>();

        let instances = JobFlowInstancesConfig::builder()
            .ec2_key_name(&spec.ec2_key_name)
            .master_instance_type(&spec.master_instance_type)
            .slave_instance_type(&spec.slave_instance_type)
            .instance_count(spec.instance_count)
            .keep_job_flow_alive_when_no_steps(false)
            .build();

        debug!("steps: {:?}", steps);
        info!("run job flow {:?} in {}", spec.name, self.region);

        let output = self
            .client
            .run_job_flow()
            .name(&spec.name)
            .log_uri(&spec.log_uri)
            .ami_version(&spec.ami_version)
            .instances(instances)
            .set_steps(Some(steps))
            .set_bootstrap_actions(Some(bootstrap_actions))
            .job_flow_role(&spec.job_flow_role)
            .service_role(&spec.service_role)
            .send()
            .await
            .map_err(|err| Error::Submission(err.into()))?;

        output
            .job_flow_id()
            .map(str::to_string)
            .ok_or_else(|| Error::Submission("EMR returned no job flow id".into()))
    }
}

/// Submit `spec` once. Failures are returned as they come, nothing is retried.
pub async fn submit<F>(flows: &F, spec: &JobSpec) -> Result<String, Error>
where
    F: JobFlows + ?Sized,
{
    let job_id = flows.run_job_flow(spec).await?;
    info!("started job flow {}", job_id);
    Ok(job_id)
}
