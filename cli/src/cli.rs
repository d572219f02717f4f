pub mod opts;
pub mod subs;

use anyhow::{Context, Result};
use colored::*;
use log::*;
use sparkjob_lib::{
    emr::{submit, EmrJobFlows},
    job::build_job_spec,
    location::normalize_region,
    s3::{region_of, upload_jar, S3Storage, GLOBAL_REGION},
    sbt,
};
use std::io;

use opts::Opts;
use subs::{Run, Upload};

pub(crate) fn test(opts: &Opts) -> Result<()> {
    sbt::test(&opts.project_dir).context("sbt test failed")
}

pub(crate) fn package(opts: &Opts) -> Result<()> {
    sbt::package(&opts.project_dir).context("sbt assembly failed")
}

pub(crate) async fn upload(opts: &Opts, sub: &Upload) -> Result<()> {
    let region = region_of(
        &S3Storage::connect(&sub.profile, GLOBAL_REGION).await,
        &sub.bucket,
    )
    .await
    .with_context(|| format!("couldn't locate bucket {}", sub.bucket))?;

    let storage = S3Storage::connect(&sub.profile, region).await;
    let key = upload_jar(&storage, &sub.bucket, &opts.jar_dir, &opts.jar_name)
        .await
        .with_context(|| {
            format!(
                "failed to upload {} to bucket {}",
                opts.jar_dir.join(&opts.jar_name).display(),
                sub.bucket
            )
        })?;

    println!(
        "Uploaded {} to s3://{}/{}",
        opts.jar_dir.join(&opts.jar_name).display(),
        sub.bucket,
        key
    );
    Ok(())
}

/// EMR silently writes into the wrong place when these lack a trailing slash.
fn check_trailing_slash(name: &str, path: &str) {
    if !path.ends_with('/') {
        warn!("{} path {:?} has no trailing slash", name, path);
    }
}

pub(crate) async fn run(sub: &Run) -> Result<()> {
    check_trailing_slash("output", &sub.output);
    check_trailing_slash("errors", &sub.errors);

    let region = match &sub.region {
        Some(region) => normalize_region(region)?,
        None => region_of(
            &S3Storage::connect(&sub.profile, GLOBAL_REGION).await,
            &sub.input,
        )
        .await
        .with_context(|| format!("couldn't find the region of {}", sub.input))?,
    };
    info!("region: {}", region);

    let spec = build_job_spec(
        &sub.input,
        &sub.output,
        &sub.errors,
        &sub.log,
        &sub.ssh_key,
    );

    if sub.dry_run {
        if sub.json {
            let stdout = io::stdout();
            let handle = stdout.lock();
            serde_json::to_writer_pretty(
                handle,
                &serde_json::json!({ "region": region, "job_flow": spec }),
            )?;
            println!();
        } else {
            println!("Region: {}", region);
            spec.table().printstd();
        }
        return Ok(());
    }

    let flows = EmrJobFlows::connect(&sub.profile, region).await?;
    let job_id = submit(&flows, &spec).await?;
    println!("{} {}", "Started jobflow".green(), job_id);
    Ok(())
}
