//! Collection command - collection management, query and chat.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

/// Arguments for the collection command.
#[derive(Args, Debug)]
pub struct CollectionArgs {
    #[command(subcommand)]
    pub command: CollectionCommand,
}

#[derive(Subcommand, Debug)]
pub enum CollectionCommand {
    /// Create a collection
    Create {
        /// Collection ID (generated by the server if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// List all collections
    List,

    /// Query a collection
    Query {
        /// Collection ID
        collection_id: String,

        /// Query text
        query: String,

        /// JSON schema the answer should follow
        #[arg(long)]
        json_schema: Option<String>,

        /// Rules for the JSON schema
        #[arg(long)]
        json_schema_rules: Option<String>,
    },

    /// Chat with a collection
    Chat {
        /// Collection ID
        collection_id: String,

        /// Message to send
        message: String,

        /// Prior conversation as a JSON array of {role, content} objects
        #[arg(long)]
        history: Option<String>,
    },

    /// Delete a collection
    Delete {
        /// Collection ID
        collection_id: String,
    },
}

/// Run the collection command.
pub fn run(args: CollectionArgs, ctx: &Context) -> Result<()> {
    let collections = ctx.client.collections();

    let envelope = match args.command {
        CollectionCommand::Create { id } => collections.create(id.as_deref())?,
        CollectionCommand::List => collections.list_all()?,
        CollectionCommand::Query {
            collection_id,
            query,
            json_schema,
            json_schema_rules,
        } => collections.query(
            &collection_id,
            &query,
            json_schema.as_deref(),
            json_schema_rules.as_deref(),
        )?,
        CollectionCommand::Chat {
            collection_id,
            message,
            history,
        } => collections.chat(&collection_id, &message, history.as_deref())?,
        CollectionCommand::Delete { collection_id } => collections.delete(&collection_id)?,
    };

    ctx.print(envelope)
}
