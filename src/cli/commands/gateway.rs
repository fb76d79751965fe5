//! Gateway command - customer gateway VPN configuration lookup

use super::CommandContext;
use crate::cli::output::OutputFormatter;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use vpnhelper::aws::get_customer_gateway_config_for_stack;

/// Arguments for gateway-config command
#[derive(Parser, Debug, Clone)]
pub struct GatewayConfigArgs {
    /// Public IP of the customer gateway
    #[arg(long, value_name = "IP")]
    pub ip: String,

    /// CloudFormation stack exposing CustomerGateway* outputs
    #[arg(long, value_name = "STACK")]
    pub stack: String,
}

#[derive(Debug, Serialize)]
struct GatewayConfigOutput<'a> {
    customer_gateway_ip: &'a str,
    stack_name: &'a str,
    configuration: &'a str,
}

impl GatewayConfigArgs {
    /// Execute the gateway-config command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let clients = ctx.clients().await;

        let configuration = match get_customer_gateway_config_for_stack(
            &clients.ec2,
            &clients.cloudformation,
            &self.ip,
            &self.stack,
        )
        .await
        {
            Ok(config) => config,
            Err(e) => return Ok(ctx.fail(&e)),
        };

        ctx.output.print(&self.render(&ctx.output, &configuration)?);
        Ok(0)
    }

    /// The configuration document as-is, or wrapped in a JSON object
    fn render(&self, output: &OutputFormatter, configuration: &str) -> Result<String> {
        if output.is_json() {
            output.json(&GatewayConfigOutput {
                customer_gateway_ip: &self.ip,
                stack_name: &self.stack,
                configuration,
            })
        } else {
            Ok(configuration.to_string())
        }
    }
}
