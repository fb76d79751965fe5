//! Public/private route table lookup for a VPC.
//!
//! Route tables are identified by tag *value*: a route table carrying any tag
//! whose value is `PublicRouteTable` is the public table, and likewise for
//! `PrivateRouteTable`. Tag keys are ignored.

use super::api::{filter, Ec2Api};
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Tag value marking the public route table.
pub const PUBLIC_ROUTE_TABLE_TAG: &str = "PublicRouteTable";

/// Tag value marking the private route table.
pub const PRIVATE_ROUTE_TABLE_TAG: &str = "PrivateRouteTable";

/// IDs of the public and private route tables for a VPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTableIds {
    /// Public route table ID
    pub public: String,
    /// Private route table ID
    pub private: String,
}

impl RouteTableIds {
    /// Both IDs have been found.
    pub fn is_complete(&self) -> bool {
        !self.public.is_empty() && !self.private.is_empty()
    }
}

/// Find the tagged public and private route tables of `vpc_id`.
///
/// Issues one DescribeRouteTables call filtered on `vpc-id`. When several
/// route tables carry the same role tag, the last one in response order wins.
/// Fails with [`Error::RouteTableIdsNotFound`] unless both roles are found.
pub async fn get_route_table_ids<E>(ec2: &E, vpc_id: &str) -> Result<RouteTableIds>
where
    E: Ec2Api + ?Sized,
{
    debug!(vpc_id, "Describing route tables");
    let resp = ec2
        .describe_route_tables(vec![filter("vpc-id", vpc_id)])
        .await?;

    let mut ids = RouteTableIds::default();
    for route_table in resp.route_tables() {
        let route_table_id = route_table.route_table_id().unwrap_or_default();
        for tag in route_table.tags() {
            match tag.value() {
                Some(PUBLIC_ROUTE_TABLE_TAG) => ids.public = route_table_id.to_string(),
                Some(PRIVATE_ROUTE_TABLE_TAG) => ids.private = route_table_id.to_string(),
                _ => {}
            }
        }
    }

    if !ids.is_complete() {
        debug!(vpc_id, public = %ids.public, private = %ids.private, "Incomplete route table tags");
        return Err(Error::RouteTableIdsNotFound {
            vpc_id: vpc_id.to_string(),
        });
    }

    info!(vpc_id, public = %ids.public, private = %ids.private, "Resolved route tables");
    Ok(ids)
}
