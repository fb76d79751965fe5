//! # vpnhelper
//!
//! Helpers that resolve the identifiers VPN/VPC automation needs from the AWS
//! EC2 and CloudFormation APIs:
//!
//! - the distinct VPCs a set of instances live in,
//! - the public and private route tables of a VPC, found by tag value,
//! - the VPN configuration document of a customer gateway exposed by a
//!   CloudFormation stack.
//!
//! Each lookup is a single request/response round trip with light filtering
//! on the result. API failures are returned to the caller unchanged; there is
//! no retry, pagination or caching.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use vpnhelper::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let clients = AwsClients::load(&AwsConfig::default()).await;
//!
//!     let config = get_customer_gateway_config_for_stack(
//!         &clients.ec2,
//!         &clients.cloudformation,
//!         "203.0.113.10",
//!         "office-vpn",
//!     )
//!     .await?;
//!
//!     println!("{config}");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aws;
pub mod config;
pub mod error;

pub mod prelude {
    //! Convenient re-exports of the resolvers, client types and errors.

    pub use crate::aws::{
        get_customer_gateway_config, get_customer_gateway_config_for_stack,
        get_route_table_ids, get_vpc_ids, load_stack, AwsClients, CloudFormationApi, Ec2Api,
        RouteTableIds, StackDescription, StackOutput,
    };
    pub use crate::config::{AwsConfig, Config};
    pub use crate::error::{Error, Result};
}

pub use error::{Error, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
