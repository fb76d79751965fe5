//! AWS lookups for VPN/VPC automation.
//!
//! ## Available Resolvers
//!
//! - [`get_vpc_ids`](vpc::get_vpc_ids): instances to distinct VPC IDs
//! - [`get_route_table_ids`](route_table::get_route_table_ids): tagged public/private route tables of a VPC
//! - [`get_customer_gateway_config`](customer_gateway::get_customer_gateway_config):
//!   customer gateway VPN configuration from CloudFormation stack outputs
//!
//! Each resolver is generic over the [`Ec2Api`] / [`CloudFormationApi`] traits.
//! [`AwsClients`] provides SDK-backed implementations of both.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vpnhelper::aws::{get_route_table_ids, get_vpc_ids, AwsClients};
//! use vpnhelper::config::AwsConfig;
//!
//! let clients = AwsClients::load(&AwsConfig::default()).await;
//! let vpcs = get_vpc_ids(&clients.ec2, &["i-0123456789abcdef0".to_string()]).await?;
//! let tables = get_route_table_ids(&clients.ec2, &vpcs[0]).await?;
//! println!("public={} private={}", tables.public, tables.private);
//! ```

pub mod api;
pub mod client;
pub mod customer_gateway;
pub mod route_table;
pub mod vpc;

pub use api::{CloudFormationApi, Ec2Api};
pub use client::{load_sdk_config, AwsClients, SdkCloudFormation, SdkEc2};
pub use customer_gateway::{
    get_customer_gateway_config, get_customer_gateway_config_for_stack, load_stack,
    StackDescription, StackOutput,
};
pub use route_table::{get_route_table_ids, RouteTableIds};
pub use vpc::get_vpc_ids;
