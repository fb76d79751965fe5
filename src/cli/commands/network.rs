//! Network commands - VPC and route table lookups
//!
//! This module implements the `vpc-ids` and `route-tables` subcommands.

use super::CommandContext;
use crate::cli::output::OutputFormatter;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use vpnhelper::aws::{get_route_table_ids, get_vpc_ids, RouteTableIds};

/// Arguments for vpc-ids command
#[derive(Parser, Debug, Clone)]
pub struct VpcIdsArgs {
    /// Instance IDs to resolve
    #[arg(required = true, value_name = "INSTANCE_ID")]
    pub instance_ids: Vec<String>,
}

impl VpcIdsArgs {
    /// Execute the vpc-ids command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let clients = ctx.clients().await;

        let vpc_ids = match get_vpc_ids(&clients.ec2, &self.instance_ids).await {
            Ok(ids) => ids,
            Err(e) => return Ok(ctx.fail(&e)),
        };

        ctx.output.print(&self.render(&ctx.output, &vpc_ids)?);
        Ok(0)
    }

    /// One VPC ID per line, or a JSON array
    fn render(&self, output: &OutputFormatter, vpc_ids: &[String]) -> Result<String> {
        if output.is_json() {
            output.json(vpc_ids)
        } else {
            Ok(output.values(vpc_ids))
        }
    }
}

/// Arguments for route-tables command
#[derive(Parser, Debug, Clone)]
pub struct RouteTablesArgs {
    /// VPC to search
    #[arg(value_name = "VPC_ID")]
    pub vpc_id: String,
}

#[derive(Debug, Serialize)]
struct RouteTablesOutput<'a> {
    vpc_id: &'a str,
    #[serde(flatten)]
    ids: &'a RouteTableIds,
}

impl RouteTablesArgs {
    /// Execute the route-tables command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let clients = ctx.clients().await;

        let ids = match get_route_table_ids(&clients.ec2, &self.vpc_id).await {
            Ok(ids) => ids,
            Err(e) => return Ok(ctx.fail(&e)),
        };

        ctx.output.print(&self.render(&ctx.output, &ids)?);
        Ok(0)
    }

    fn render(&self, output: &OutputFormatter, ids: &RouteTableIds) -> Result<String> {
        if output.is_json() {
            return output.json(&RouteTablesOutput {
                vpc_id: &self.vpc_id,
                ids,
            });
        }

        Ok(format!(
            "{}\n{}",
            output.field("public", &ids.public),
            output.field("private", &ids.private)
        ))
    }
}
