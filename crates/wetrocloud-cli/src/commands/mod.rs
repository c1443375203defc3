//! CLI command handlers.

pub mod collection;
pub mod convert;
pub mod generate;
pub mod resource;

use anyhow::Result;
use wetrocloud::{Envelope, WetrocloudClient};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configured API client.
    pub client: WetrocloudClient,
    /// Print single-line JSON.
    pub compact: bool,
}

impl Context {
    /// Print a response envelope to stdout.
    pub fn print(&self, envelope: Envelope) -> Result<()> {
        let value = serde_json::Value::Object(envelope);
        let text = if self.compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        println!("{}", text);
        Ok(())
    }
}
