//! Narrow client interfaces over the AWS calls the resolvers make.
//!
//! The resolvers only ever issue three EC2 requests and one CloudFormation
//! request. Putting those behind traits lets them run against the real SDK
//! clients ([`SdkEc2`](super::client::SdkEc2),
//! [`SdkCloudFormation`](super::client::SdkCloudFormation)) or against a fake
//! in tests.

use crate::aws::customer_gateway::StackDescription;
use crate::error::Result;
use async_trait::async_trait;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use aws_sdk_ec2::operation::describe_route_tables::DescribeRouteTablesOutput;
use aws_sdk_ec2::operation::describe_vpn_connections::DescribeVpnConnectionsOutput;
use aws_sdk_ec2::types::Filter;

/// EC2 describe calls used for VPN/VPC lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Ec2Api: Send + Sync {
    /// DescribeInstances for an explicit set of instance IDs.
    async fn describe_instances(&self, instance_ids: Vec<String>)
        -> Result<DescribeInstancesOutput>;

    /// DescribeRouteTables with the given filters.
    async fn describe_route_tables(&self, filters: Vec<Filter>)
        -> Result<DescribeRouteTablesOutput>;

    /// DescribeVpnConnections with the given filters.
    async fn describe_vpn_connections(
        &self,
        filters: Vec<Filter>,
    ) -> Result<DescribeVpnConnectionsOutput>;
}

/// CloudFormation describe calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloudFormationApi: Send + Sync {
    /// DescribeStacks for a single stack name or ID.
    ///
    /// Returns `None` when the response carries no stacks.
    async fn describe_stack(&self, stack_name: String) -> Result<Option<StackDescription>>;
}

/// Build a single-valued EC2 filter.
pub(crate) fn filter(name: &str, value: &str) -> Filter {
    Filter::builder().name(name).values(value).build()
}
