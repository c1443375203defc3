//! Markdown and transcript commands.

use anyhow::Result;
use clap::Args;
use wetrocloud::MarkdownResourceType;

use super::Context;

/// Arguments for the markdown command.
#[derive(Args, Debug)]
pub struct MarkdownArgs {
    /// Link to the resource
    pub link: String,

    /// Resource type: file, web or image
    #[arg(short = 't', long = "type", default_value = "web")]
    pub resource_type: MarkdownResourceType,
}

/// Arguments for the transcript command.
#[derive(Args, Debug)]
pub struct TranscriptArgs {
    /// YouTube link
    pub link: String,
}

/// Run the markdown command.
pub fn run_markdown(args: MarkdownArgs, ctx: &Context) -> Result<()> {
    let envelope = ctx
        .client
        .conversion()
        .markdown(&args.link, args.resource_type)?;
    ctx.print(envelope)
}

/// Run the transcript command.
pub fn run_transcript(args: TranscriptArgs, ctx: &Context) -> Result<()> {
    let envelope = ctx.client.conversion().transcript(&args.link)?;
    ctx.print(envelope)
}
