//! Instance to VPC resolution.

use super::api::Ec2Api;
use crate::error::Result;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Resolve the distinct VPC IDs that the given instances belong to.
///
/// Issues a single DescribeInstances call for all IDs and collects the VPC ID
/// of every instance in every reservation. The result is deduplicated and
/// sorted. Instances without a VPC ID are skipped.
///
/// An empty `instance_ids` slice is passed through as is, so the call
/// describes every instance visible to the account.
pub async fn get_vpc_ids<E>(ec2: &E, instance_ids: &[String]) -> Result<Vec<String>>
where
    E: Ec2Api + ?Sized,
{
    debug!(instances = ?instance_ids, "Describing instances");
    let resp = ec2.describe_instances(instance_ids.to_vec()).await?;

    let mut vpc_ids = BTreeSet::new();
    for reservation in resp.reservations() {
        for instance in reservation.instances() {
            match instance.vpc_id() {
                Some(vpc_id) => {
                    vpc_ids.insert(vpc_id.to_string());
                }
                None => warn!(
                    instance_id = instance.instance_id().unwrap_or_default(),
                    "Instance has no VPC id"
                ),
            }
        }
    }

    let vpc_ids: Vec<String> = vpc_ids.into_iter().collect();
    info!(count = vpc_ids.len(), "Resolved VPC ids: {:?}", vpc_ids);
    Ok(vpc_ids)
}
