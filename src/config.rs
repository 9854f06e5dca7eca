//! Command-line and environment configuration.
//!
//! Every option can also be set through a `SUBNET_CALC_*` variable, which
//! `main` may load from a `.env` file before parsing.

use crate::models::{parse_address, Ipv4Block};
use crate::validation::{is_valid_host_count, is_valid_subnet_count, parse_prefix};
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "IPv4 subnet calculator: masks, ranges and equal-size subnetting")]
pub struct Args {
    /// IPv4 address, optionally with prefix (e.g. 192.168.1.10/24)
    #[arg(env = "SUBNET_CALC_ADDRESS")]
    pub address: String,

    /// Prefix length as /n or n, when not given with the address
    #[arg(long, short, env = "SUBNET_CALC_PREFIX", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Number of hosts required (checked against the prefix)
    #[arg(long, env = "SUBNET_CALC_HOSTS", allow_hyphen_values = true)]
    pub hosts: Option<String>,

    /// Number of equal subnets to split the block into
    #[arg(long, short, env = "SUBNET_CALC_SUBNETS", allow_hyphen_values = true)]
    pub subnets: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text, env = "SUBNET_CALC_FORMAT")]
    pub format: OutputFormat,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", env = "SUBNET_CALC_LOG_CONFIG")]
    pub log_config: PathBuf,
}

/// Validated inputs for one calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub block: Ipv4Block,
    pub hosts: Option<u64>,
    pub subnets: Option<u64>,
    pub format: OutputFormat,
}

fn optional_count(text: Option<&str>) -> Result<Option<u64>, Box<dyn Error>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(n) => Ok(Some(n.parse()?)),
    }
}

impl Args {
    /// Check every field with the validation predicates and build a [`Request`].
    pub fn into_request(self) -> Result<Request, Box<dyn Error>> {
        let address_arg = self.address.trim();
        let (addr, inline_prefix) = if address_arg.contains('/') {
            let block = Ipv4Block::new(address_arg)?;
            (block.addr(), Some(block.prefix()))
        } else {
            (parse_address(address_arg)?, None)
        };

        let option_prefix = self
            .prefix
            .as_deref()
            .map(|p| parse_prefix(p).ok_or_else(|| format!("Invalid prefix: {p}")))
            .transpose()?;
        let prefix = match (inline_prefix, option_prefix) {
            (Some(a), Some(b)) if a != b => {
                return Err(format!("Conflicting prefixes /{a} and /{b}").into());
            }
            (Some(p), _) | (None, Some(p)) => p,
            (None, None) => return Err("Missing prefix: use ADDRESS/n or --prefix".into()),
        };
        let block = Ipv4Block::from_parts(addr, prefix)?;

        let hosts = self.hosts.as_deref().unwrap_or("");
        if !is_valid_host_count(prefix, hosts) {
            return Err(format!("Invalid host count for /{prefix}: {hosts}").into());
        }
        let subnets = self.subnets.as_deref().unwrap_or("");
        if !is_valid_subnet_count(prefix, subnets) {
            return Err(format!("Invalid subnet count for /{prefix}: {subnets}").into());
        }

        let request = Request {
            block,
            hosts: optional_count(Some(hosts))?,
            subnets: optional_count(Some(subnets))?,
            format: self.format,
        };
        log::debug!("Resolved request: {:?}", request);
        Ok(request)
    }
}
