use std::path::Path;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use log::info;

use crate::error::Error;
use crate::location::{resolve_region, Location};

/// Region used to ask S3 where a bucket lives. Any bucket can be located
/// from here.
pub const GLOBAL_REGION: &str = "us-east-1";

#[async_trait]
pub trait Storage {
    async fn bucket_location(&self, bucket: &str) -> Result<Location, Error>;
    async fn upload(&self, bucket: &str, key: &str, path: &Path) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: s3::Client,
}

impl S3Storage {
    pub async fn connect(profile: &str, region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: s3::Client::new(&config),
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn bucket_location(&self, bucket: &str) -> Result<Location, Error> {
        let output = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| Error::Storage(err.into()))?;

        let constraint = output.location_constraint().map(|c| c.as_str());
        Location::from_constraint(constraint).ok_or_else(|| Error::UnknownLocationConstraint {
            bucket: bucket.to_string(),
            constraint: constraint.unwrap_or_default().to_string(),
        })
    }

    async fn upload(&self, bucket: &str, key: &str, path: &Path) -> Result<(), Error> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|err| Error::Storage(err.into()))?;

        info!("put {} to s3://{}/{}", path.display(), bucket, key);
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| Error::Storage(err.into()))?;
        Ok(())
    }
}

/// Upload `<jar_dir>/<jar_name>` to `<bucket>/jar/<jar_name>` and return
/// the key it was stored under.
pub async fn upload_jar<S>(
    storage: &S,
    bucket: &str,
    jar_dir: &Path,
    jar_name: &str,
) -> Result<String, Error>
where
    S: Storage + ?Sized,
{
    let key = format!("jar/{}", jar_name);
    storage.upload(bucket, &key, &jar_dir.join(jar_name)).await?;
    Ok(key)
}

/// The bucket a scheme-less S3 path (`bucket/some/prefix`) points into.
pub fn bucket_of(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

/// Region of the bucket `path` lives in.
pub async fn region_of<S>(storage: &S, path: &str) -> Result<&'static str, Error>
where
    S: Storage + ?Sized,
{
    let bucket = bucket_of(path);
    let location = storage.bucket_location(bucket).await?;
    info!("bucket {} is in location {}", bucket, location);
    resolve_region(location)
}
