//! Customer gateway VPN configuration lookup from CloudFormation stack outputs.
//!
//! A VPN stack exposes each customer gateway it creates as a stack output whose
//! key starts with `CustomerGateway` and whose value is the gateway ID, e.g.
//!
//! ```text
//! CustomerGatewayA  cgw-0123456789abcdef0
//! CustomerGatewayB  cgw-0fedcba9876543210
//! VpnGatewayId      vgw-00112233445566778
//! ```
//!
//! The resolver walks those outputs, looks up the VPN connection attached to
//! each gateway and returns the first configuration document that mentions
//! the requested gateway IP.

use super::api::{filter, CloudFormationApi, Ec2Api};
use crate::error::{Error, Result};
use aws_sdk_cloudformation::types::Stack;
use tracing::{debug, info, warn};

/// Stack output key prefix identifying customer gateway IDs.
pub const CUSTOMER_GATEWAY_OUTPUT_PREFIX: &str = "CustomerGateway";

/// A single key/value stack output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    /// Output key, e.g. `CustomerGatewayA`
    pub key: String,
    /// Output value
    pub value: String,
}

impl StackOutput {
    /// Create an output from a key and value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The parts of a CloudFormation stack description the resolver reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackDescription {
    /// Stack name
    pub stack_name: String,
    /// Outputs in the order CloudFormation returned them
    pub outputs: Vec<StackOutput>,
}

impl StackDescription {
    /// Create a description from a stack name and its outputs
    pub fn new(stack_name: impl Into<String>, outputs: Vec<StackOutput>) -> Self {
        Self {
            stack_name: stack_name.into(),
            outputs,
        }
    }

    /// Outputs whose key starts with [`CUSTOMER_GATEWAY_OUTPUT_PREFIX`], in order.
    pub fn customer_gateway_outputs(&self) -> impl Iterator<Item = &StackOutput> {
        self.outputs
            .iter()
            .filter(|o| o.key.starts_with(CUSTOMER_GATEWAY_OUTPUT_PREFIX))
    }
}

impl From<&Stack> for StackDescription {
    fn from(stack: &Stack) -> Self {
        let outputs = stack
            .outputs()
            .iter()
            .filter_map(|o| match (o.output_key(), o.output_value()) {
                (Some(key), Some(value)) => Some(StackOutput::new(key, value)),
                _ => {
                    warn!(key = ?o.output_key(), "Skipping stack output without key or value");
                    None
                }
            })
            .collect();

        Self {
            stack_name: stack.stack_name().unwrap_or_default().to_string(),
            outputs,
        }
    }
}

/// Find the VPN configuration for `customer_gateway_ip` among the customer
/// gateways exposed by `stack`.
///
/// For each `CustomerGateway*` output, in order, VPN connections are queried
/// by `customer-gateway-id`. Only the first returned connection is inspected;
/// its configuration document is returned if it contains the IP as a
/// substring. API errors abort the scan. If nothing matches,
/// [`Error::CustomerGatewayConfigNotFound`] is returned.
pub async fn get_customer_gateway_config<E>(
    ec2: &E,
    customer_gateway_ip: &str,
    stack: &StackDescription,
) -> Result<String>
where
    E: Ec2Api + ?Sized,
{
    for output in stack.customer_gateway_outputs() {
        let customer_gateway_id = output.value.as_str();
        debug!(
            output = %output.key,
            customer_gateway_id,
            "Describing VPN connections for customer gateway"
        );

        let resp = ec2
            .describe_vpn_connections(vec![filter("customer-gateway-id", customer_gateway_id)])
            .await?;

        let Some(connection) = resp.vpn_connections().first() else {
            warn!(customer_gateway_id, "No VPN connection for customer gateway");
            continue;
        };

        match connection.customer_gateway_configuration() {
            Some(config) if config.contains(customer_gateway_ip) => {
                info!(
                    customer_gateway_id,
                    vpn_connection_id = connection.vpn_connection_id().unwrap_or_default(),
                    "Resolved customer gateway configuration"
                );
                return Ok(config.to_string());
            }
            Some(_) => debug!(
                customer_gateway_id,
                customer_gateway_ip, "Configuration does not mention gateway IP"
            ),
            None => warn!(customer_gateway_id, "VPN connection has no configuration"),
        }
    }

    Err(Error::CustomerGatewayConfigNotFound {
        stack_name: stack.stack_name.clone(),
        customer_gateway_ip: customer_gateway_ip.to_string(),
    })
}

/// Fetch a stack by name.
///
/// Fails with [`Error::StackNotFound`] when DescribeStacks returns no stack.
pub async fn load_stack<C>(cloudformation: &C, stack_name: &str) -> Result<StackDescription>
where
    C: CloudFormationApi + ?Sized,
{
    debug!(stack_name, "Describing stack");
    cloudformation
        .describe_stack(stack_name.to_string())
        .await?
        .ok_or_else(|| Error::StackNotFound(stack_name.to_string()))
}

/// [`load_stack`] followed by [`get_customer_gateway_config`].
pub async fn get_customer_gateway_config_for_stack<E, C>(
    ec2: &E,
    cloudformation: &C,
    customer_gateway_ip: &str,
    stack_name: &str,
) -> Result<String>
where
    E: Ec2Api + ?Sized,
    C: CloudFormationApi + ?Sized,
{
    let stack = load_stack(cloudformation, stack_name).await?;
    get_customer_gateway_config(ec2, customer_gateway_ip, &stack).await
}
