//! Generate and image-to-text commands.

use anyhow::Result;
use clap::Args;
use wetrocloud::ChatMessage;

use super::Context;

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Prompt sent as the user message
    pub prompt: String,

    /// Model identifier
    #[arg(short, long)]
    pub model: String,

    /// Optional system message sent before the prompt
    #[arg(long)]
    pub system: Option<String>,
}

/// Arguments for the image-to-text command.
#[derive(Args, Debug)]
pub struct ImageToTextArgs {
    /// Image URL
    pub image_url: String,

    /// Question about the image
    pub query: String,
}

/// Run the generate command.
pub fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = args.system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(args.prompt));

    tracing::debug!(model = %args.model, messages = messages.len(), "generating text");
    let envelope = ctx.client.generation().text(&messages, &args.model)?;
    ctx.print(envelope)
}

/// Run the image-to-text command.
pub fn run_image_to_text(args: ImageToTextArgs, ctx: &Context) -> Result<()> {
    let envelope = ctx
        .client
        .generation()
        .image_to_text(&args.image_url, &args.query)?;
    ctx.print(envelope)
}
