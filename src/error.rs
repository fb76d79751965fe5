//! Error types for vpnhelper.
//!
//! API failures from the AWS SDK are carried through unchanged; the remaining
//! variants describe lookups that completed but found nothing usable.

use thiserror::Error;

/// Result type alias for vpnhelper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for vpnhelper.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // API Errors
    // ========================================================================
    /// An EC2 request failed.
    #[error(transparent)]
    Ec2(#[from] aws_sdk_ec2::Error),

    /// A CloudFormation request failed.
    #[error(transparent)]
    CloudFormation(#[from] aws_sdk_cloudformation::Error),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// The VPC has no route tables tagged for one or both roles.
    #[error("route table ids not found")]
    RouteTableIdsNotFound {
        /// VPC that was searched
        vpc_id: String,
    },

    /// No `CustomerGateway*` stack output led to a configuration containing the gateway IP.
    #[error("unable to get CustomerGatewayID from cloudformation stack")]
    CustomerGatewayConfigNotFound {
        /// Stack whose outputs were scanned
        stack_name: String,
        /// Gateway IP that was searched for
        customer_gateway_ip: String,
    },

    /// DescribeStacks returned no stack for the given name.
    #[error("cloudformation stack '{0}' not found")]
    StackNotFound(String),
}

impl Error {
    /// Returns true if the error came from an AWS API call rather than from
    /// an empty lookup.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Ec2(_) | Error::CloudFormation(_))
    }
}
