mod config;
mod service;

use anyhow::Result;
use crate::config::Config;
use crate::service::ReplyService;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Webhook body from the first argument, stdin otherwise
    let input = std::env::args_os().nth(1).map(PathBuf::from);

    let gateway = ReplyService::new(config);
    gateway.run(input.as_deref())
}
