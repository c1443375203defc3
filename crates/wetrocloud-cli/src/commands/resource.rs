//! Resource command - insert, remove and categorize resources.

use anyhow::Result;
use clap::{Args, Subcommand};
use wetrocloud::CategorizeRequest;

use super::Context;

/// Arguments for the resource command.
#[derive(Args, Debug)]
pub struct ResourceArgs {
    #[command(subcommand)]
    pub command: ResourceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Insert a resource into a collection
    Insert {
        /// Collection ID
        collection_id: String,

        /// Resource content or link
        resource: String,

        /// Resource type (e.g. web, file, text, json, youtube)
        #[arg(short = 't', long = "type")]
        resource_type: String,
    },

    /// Remove a resource from a collection
    Remove {
        /// Collection ID
        collection_id: String,

        /// Resource ID
        resource_id: String,
    },

    /// Categorize a resource
    Categorize {
        /// Resource content or link
        resource: String,

        /// Resource type
        #[arg(short = 't', long = "type")]
        resource_type: String,

        /// JSON schema for the label
        #[arg(long)]
        json_schema: String,

        /// Comma-separated candidate categories
        #[arg(long)]
        categories: String,

        /// Instruction for the categorization
        #[arg(long)]
        prompt: String,
    },
}

/// Run the resource command.
pub fn run(args: ResourceArgs, ctx: &Context) -> Result<()> {
    let resources = ctx.client.resources();

    let envelope = match args.command {
        ResourceCommand::Insert {
            collection_id,
            resource,
            resource_type,
        } => resources.insert(&collection_id, &resource, &resource_type)?,
        ResourceCommand::Remove {
            collection_id,
            resource_id,
        } => resources.remove(&collection_id, &resource_id)?,
        ResourceCommand::Categorize {
            resource,
            resource_type,
            json_schema,
            categories,
            prompt,
        } => resources.categorize(CategorizeRequest {
            resource,
            resource_type,
            json_schema,
            categories,
            prompt,
        })?,
    };

    ctx.print(envelope)
}
