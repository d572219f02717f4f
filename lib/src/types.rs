use prettytable::{row, Table};
use serde::Serialize;

/// A setup script run on every node before any step starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapAction {
    pub name: String,
    pub path: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOnFailure {
    TerminateJobFlow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub name: String,
    pub jar: String,
    pub args: Vec<String>,
    pub action_on_failure: ActionOnFailure,
}

/// Everything EMR needs to start one job flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSpec {
    pub name: String,
    pub log_uri: String,
    pub ec2_key_name: String,
    pub master_instance_type: String,
    pub slave_instance_type: String,
    pub instance_count: i32,
    pub ami_version: String,
    /// EMR prepends its region specific debugging step when set.
    pub enable_debugging: bool,
    pub job_flow_role: String,
    pub service_role: String,
    pub bootstrap_actions: Vec<BootstrapAction>,
    pub steps: Vec<Step>,
}

impl JobSpec {
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Job flow", self.name]);
        table.add_row(row!["Log URI", self.log_uri]);
        table.add_row(row!["EC2 key", self.ec2_key_name]);
        table.add_row(row![
            "Instances",
            format!(
                "{} x {} (master {})",
                self.instance_count, self.slave_instance_type, self.master_instance_type
            )
        ]);
        table.add_row(row!["AMI", self.ami_version]);
        table.add_row(row![
            "Roles",
            format!("{} / {}", self.job_flow_role, self.service_role)
        ]);

        for action in &self.bootstrap_actions {
            table.add_row(row![
                format!("Bootstrap: {}", action.name),
                format!("{} {}", action.path, action.args.join(" "))
            ]);
        }

        for (index, step) in self.steps.iter().enumerate() {
            table.add_row(row![
                format!("Step {}: {}", index + 1, step.name),
                format!("{}\n{}", step.jar, step.args.join("\n"))
            ]);
        }

        table
    }
}
