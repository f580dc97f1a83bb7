use crate::config::Config;
use anyhow::{Context, Result};
use lineclaw_channel::{parse_webhook, text_messages, Reply, ReplyMessage};
use lineclaw_message::MessageError;
use lineclaw_types::{InboundMessage, WebhookBody};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reply gateway - turns a webhook body into reply request bodies
pub struct ReplyService {
    config: Config,
}

impl ReplyService {
    /// Create a new reply service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read a webhook body and print one reply body per line on stdout
    pub fn run(&self, input: Option<&Path>) -> Result<()> {
        // Initialize logging
        lineclaw_logging::init_logging(&self.config.logging.level, self.config.logging.format)?;
        info!("Starting LineClaw reply gateway");

        let raw = match input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read webhook body from stdin")?;
                raw
            }
        };

        let body: WebhookBody =
            serde_json::from_str(&raw).context("Webhook body is not valid JSON")?;
        info!(
            "Received {} events for {}",
            body.events.len(),
            body.destination.as_deref().unwrap_or("unknown destination")
        );

        let replies = self.build_replies(&body);

        let mut out = io::stdout().lock();
        for reply in &replies {
            serde_json::to_writer(&mut out, reply)?;
            writeln!(out)?;
        }

        info!("Wrote {} reply bodies", replies.len());
        Ok(())
    }

    /// One echo reply per answerable event
    pub fn build_replies(&self, body: &WebhookBody) -> Vec<ReplyMessage> {
        parse_webhook(body)
            .iter()
            .filter_map(|inbound| match self.reply_to(inbound) {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("Failed to build reply for {:?}: {}", inbound.sender, e);
                    None
                }
            })
            .collect()
    }

    fn reply_to(&self, inbound: &InboundMessage) -> Result<Option<ReplyMessage>, MessageError> {
        let Some(reply_token) = inbound.reply_token.as_deref() else {
            debug!("Skipping event from {:?} without reply token", inbound.sender);
            return Ok(None);
        };
        if inbound.text.is_empty() {
            debug!("Skipping event from {:?} without text", inbound.sender);
            return Ok(None);
        }

        let text = format!("{}{}", self.config.reply.echo_prefix, inbound.text);
        let mut reply = Reply::new(reply_token)?;
        for message in text_messages(&text)?
            .iter()
            .take(self.config.reply.max_messages)
        {
            reply.add(message)?;
        }

        reply.finalize().map(Some)
    }
}
