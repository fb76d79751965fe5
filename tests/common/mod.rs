//! Shared test utilities and fixtures for the vpnhelper test suite.
//!
//! This module provides:
//! - `FakeEc2` / `FakeCloudFormation`: in-memory implementations of the API
//!   traits that serve canned responses and record every request
//! - Builders for SDK response fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use aws_sdk_ec2::error::SdkError;
use aws_sdk_ec2::operation::describe_instances::{DescribeInstancesError, DescribeInstancesOutput};
use aws_sdk_ec2::operation::describe_route_tables::DescribeRouteTablesOutput;
use aws_sdk_ec2::operation::describe_vpn_connections::DescribeVpnConnectionsOutput;
use aws_sdk_ec2::types::{Filter, Instance, Reservation, RouteTable, Tag, VpnConnection};
use parking_lot::RwLock;

use vpnhelper::aws::{CloudFormationApi, Ec2Api, StackDescription, StackOutput};
use vpnhelper::{Error, Result};

// ============================================================================
// Requests
// ============================================================================

/// A request seen by [`FakeEc2`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ec2Request {
    DescribeInstances(Vec<String>),
    DescribeRouteTables(Vec<(String, Vec<String>)>),
    DescribeVpnConnections(Vec<(String, Vec<String>)>),
}

fn flatten(filters: &[Filter]) -> Vec<(String, Vec<String>)> {
    filters
        .iter()
        .map(|f| (f.name().unwrap_or_default().to_string(), f.values().to_vec()))
        .collect()
}

/// An EC2 error as the SDK would surface a failed request.
pub fn api_error(message: &'static str) -> Error {
    let err: SdkError<DescribeInstancesError, ()> = SdkError::construction_failure(message);
    Error::Ec2(aws_sdk_ec2::Error::from(err))
}

// ============================================================================
// Fake EC2
// ============================================================================

/// In-memory EC2 backend.
///
/// Instances are registered with their VPC, route tables with their tags,
/// and VPN connection configurations per customer gateway ID.
#[derive(Default)]
pub struct FakeEc2 {
    instances: RwLock<Vec<(String, Option<String>)>>,
    route_tables: RwLock<Vec<RouteTable>>,
    vpn_configs: RwLock<HashMap<String, Vec<Option<String>>>>,
    requests: RwLock<Vec<Ec2Request>>,
    should_fail: AtomicBool,
    call_count: AtomicU32,
}

impl FakeEc2 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance in a VPC
    pub fn with_instance(self, instance_id: &str, vpc_id: Option<&str>) -> Self {
        self.instances
            .write()
            .push((instance_id.to_string(), vpc_id.map(String::from)));
        self
    }

    /// Register a route table in a VPC with `(key, value)` tags
    pub fn with_route_table(self, vpc_id: &str, route_table_id: &str, tags: &[(&str, &str)]) -> Self {
        let mut builder = RouteTable::builder()
            .route_table_id(route_table_id)
            .vpc_id(vpc_id);
        for (key, value) in tags {
            builder = builder.tags(Tag::builder().key(*key).value(*value).build());
        }
        self.route_tables.write().push(builder.build());
        self
    }

    /// Register the VPN connections attached to a customer gateway, in response order
    pub fn with_vpn_connections(self, customer_gateway_id: &str, configs: &[Option<&str>]) -> Self {
        self.vpn_configs.write().insert(
            customer_gateway_id.to_string(),
            configs.iter().map(|c| c.map(String::from)).collect(),
        );
        self
    }

    /// Fail every request with an API error
    pub fn failing(self) -> Self {
        self.should_fail.store(true, Ordering::SeqCst);
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Ec2Request> {
        self.requests.read().clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    fn record(&self, request: Ec2Request) -> Result<()> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.write().push(request);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(api_error("injected failure"));
        }
        Ok(())
    }

    fn filter_value<'a>(filters: &'a [Filter], name: &str) -> Option<&'a str> {
        filters
            .iter()
            .find(|f| f.name() == Some(name))
            .and_then(|f| f.values().first())
            .map(String::as_str)
    }
}

#[async_trait]
impl Ec2Api for FakeEc2 {
    async fn describe_instances(&self, instance_ids: Vec<String>) -> Result<DescribeInstancesOutput> {
        self.record(Ec2Request::DescribeInstances(instance_ids.clone()))?;

        // One reservation per instance, as for separate RunInstances calls
        let mut output = DescribeInstancesOutput::builder();
        for (id, vpc_id) in self.instances.read().iter() {
            // No IDs means every instance, as with the real API
            if instance_ids.is_empty() || instance_ids.contains(id) {
                let instance = Instance::builder()
                    .instance_id(id)
                    .set_vpc_id(vpc_id.clone())
                    .build();
                output = output.reservations(Reservation::builder().instances(instance).build());
            }
        }
        Ok(output.build())
    }

    async fn describe_route_tables(&self, filters: Vec<Filter>) -> Result<DescribeRouteTablesOutput> {
        self.record(Ec2Request::DescribeRouteTables(flatten(&filters)))?;

        let vpc_id = Self::filter_value(&filters, "vpc-id");
        let tables: Vec<RouteTable> = self
            .route_tables
            .read()
            .iter()
            .filter(|t| vpc_id.is_none() || t.vpc_id() == vpc_id)
            .cloned()
            .collect();
        Ok(DescribeRouteTablesOutput::builder()
            .set_route_tables(Some(tables))
            .build())
    }

    async fn describe_vpn_connections(
        &self,
        filters: Vec<Filter>,
    ) -> Result<DescribeVpnConnectionsOutput> {
        self.record(Ec2Request::DescribeVpnConnections(flatten(&filters)))?;

        let mut output = DescribeVpnConnectionsOutput::builder();
        if let Some(gateway) = Self::filter_value(&filters, "customer-gateway-id") {
            if let Some(configs) = self.vpn_configs.read().get(gateway) {
                for (i, config) in configs.iter().enumerate() {
                    output = output.vpn_connections(
                        VpnConnection::builder()
                            .vpn_connection_id(format!("vpn-{gateway}-{i}"))
                            .customer_gateway_id(gateway)
                            .set_customer_gateway_configuration(config.clone())
                            .build(),
                    );
                }
            }
        }
        Ok(output.build())
    }
}

// ============================================================================
// Fake CloudFormation
// ============================================================================

/// In-memory CloudFormation backend keyed by stack name.
#[derive(Default)]
pub struct FakeCloudFormation {
    stacks: RwLock<HashMap<String, StackDescription>>,
    requests: RwLock<Vec<String>>,
}

impl FakeCloudFormation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stack with `(key, value)` outputs
    pub fn with_stack(self, stack_name: &str, outputs: &[(&str, &str)]) -> Self {
        let outputs = outputs
            .iter()
            .map(|(k, v)| StackOutput::new(*k, *v))
            .collect();
        self.stacks
            .write()
            .insert(stack_name.to_string(), StackDescription::new(stack_name, outputs));
        self
    }

    /// Stack names requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().clone()
    }
}

#[async_trait]
impl CloudFormationApi for FakeCloudFormation {
    async fn describe_stack(&self, stack_name: String) -> Result<Option<StackDescription>> {
        self.requests.write().push(stack_name.clone());
        Ok(self.stacks.read().get(&stack_name).cloned())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A VPN configuration document mentioning the given customer gateway IP.
pub fn vpn_config(vpn_id: &str, customer_gateway_ip: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<vpn_connection id="{vpn_id}">
  <customer_gateway_id>cgw-fixture</customer_gateway_id>
  <ipsec_tunnel>
    <customer_gateway>
      <tunnel_outside_address>
        <ip_address>{customer_gateway_ip}</ip_address>
      </tunnel_outside_address>
    </customer_gateway>
  </ipsec_tunnel>
</vpn_connection>
"#
    )
}

/// Convert `&str` slices to owned IDs.
pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
