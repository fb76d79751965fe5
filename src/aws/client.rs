//! SDK-backed implementations of [`Ec2Api`] and [`CloudFormationApi`].
//!
//! Credentials come from the standard AWS credential chain:
//!
//! 1. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
//! 2. AWS credentials file (`~/.aws/credentials`), optionally a named profile
//! 3. IAM instance profile / ECS task role
//!
//! The region, profile and endpoint can be overridden through [`AwsConfig`].

use super::api::{CloudFormationApi, Ec2Api};
use super::customer_gateway::StackDescription;
use crate::config::AwsConfig;
use crate::error::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::operation::describe_route_tables::DescribeRouteTablesOutput;
use aws_sdk_ec2::operation::describe_vpn_connections::DescribeVpnConnectionsOutput;
use aws_sdk_ec2::types::Filter;
use tracing::debug;

/// Load the shared SDK configuration, applying any overrides from `settings`.
pub async fn load_sdk_config(settings: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = settings.region.as_deref() {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(profile) = settings.profile.as_deref() {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint) = settings.endpoint_url.as_deref() {
        loader = loader.endpoint_url(endpoint);
    }

    let config = loader.load().await;
    debug!(
        region = ?config.region().map(ToString::to_string),
        profile = ?settings.profile,
        "Loaded AWS SDK configuration"
    );
    config
}

/// EC2 client wrapper.
#[derive(Debug, Clone)]
pub struct SdkEc2 {
    client: aws_sdk_ec2::Client,
}

impl SdkEc2 {
    /// Wrap an existing SDK client.
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }

    /// Create a client from a shared SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_ec2::Client::new(config))
    }
}

#[async_trait]
impl Ec2Api for SdkEc2 {
    async fn describe_instances(
        &self,
        instance_ids: Vec<String>,
    ) -> Result<DescribeInstancesOutput> {
        let resp = self
            .client
            .describe_instances()
            .set_instance_ids(Some(instance_ids))
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;
        Ok(resp)
    }

    async fn describe_route_tables(
        &self,
        filters: Vec<Filter>,
    ) -> Result<DescribeRouteTablesOutput> {
        let resp = self
            .client
            .describe_route_tables()
            .set_filters(Some(filters))
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;
        Ok(resp)
    }

    async fn describe_vpn_connections(
        &self,
        filters: Vec<Filter>,
    ) -> Result<DescribeVpnConnectionsOutput> {
        let resp = self
            .client
            .describe_vpn_connections()
            .set_filters(Some(filters))
            .send()
            .await
            .map_err(aws_sdk_ec2::Error::from)?;
        Ok(resp)
    }
}

/// CloudFormation client wrapper.
#[derive(Debug, Clone)]
pub struct SdkCloudFormation {
    client: aws_sdk_cloudformation::Client,
}

impl SdkCloudFormation {
    /// Wrap an existing SDK client.
    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }

    /// Create a client from a shared SDK configuration.
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_cloudformation::Client::new(config))
    }
}

#[async_trait]
impl CloudFormationApi for SdkCloudFormation {
    async fn describe_stack(&self, stack_name: String) -> Result<Option<StackDescription>> {
        let resp = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(aws_sdk_cloudformation::Error::from)?;

        Ok(resp.stacks().first().map(StackDescription::from))
    }
}

/// Both SDK clients built from one configuration.
#[derive(Debug, Clone)]
pub struct AwsClients {
    /// EC2 client
    pub ec2: SdkEc2,
    /// CloudFormation client
    pub cloudformation: SdkCloudFormation,
}

impl AwsClients {
    /// Load SDK configuration from `settings` and build both clients.
    pub async fn load(settings: &AwsConfig) -> Self {
        let config = load_sdk_config(settings).await;
        Self {
            ec2: SdkEc2::from_sdk_config(&config),
            cloudformation: SdkCloudFormation::from_sdk_config(&config),
        }
    }
}
