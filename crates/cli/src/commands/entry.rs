//! Entry and keyword commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use client::read_payload;
use moblog::{Call, Catalog};

/// Entry upload and deletion.
#[derive(Subcommand)]
pub enum EntryCommand {
    /// Upload an image or movie as a new or replacement entry.
    Update {
        /// Moblog ID.
        moblog_id: i32,

        /// File to upload.
        file: PathBuf,

        /// Entry to replace; 0 creates a new entry.
        #[arg(long, default_value_t = 0)]
        entry_id: i32,

        /// Entry title.
        #[arg(long, default_value = "")]
        title: String,

        /// Entry description.
        #[arg(long, default_value = "")]
        text: String,

        /// Category to file the entry under.
        #[arg(long, default_value_t = 0)]
        category_id: i32,

        /// JPG, JPEG, MP4, 3GP, 3G2 or MOV.
        #[arg(long)]
        file_type: String,
    },

    /// Delete an entry.
    Delete {
        /// Moblog ID.
        moblog_id: i32,
        /// Entry ID.
        entry_id: i32,
    },
}

impl EntryCommand {
    pub async fn build(self, catalog: &Catalog<'_>) -> Result<Call> {
        let call = match self {
            Self::Update {
                moblog_id,
                file,
                entry_id,
                title,
                text,
                category_id,
                file_type,
            } => {
                let payload = read_payload(&file)
                    .await
                    .with_context(|| format!("cannot prepare upload of {}", file.display()))?;
                catalog.entry_update(
                    moblog_id,
                    entry_id,
                    &title,
                    &text,
                    category_id,
                    payload,
                    &file_type,
                )
            }
            Self::Delete { moblog_id, entry_id } => catalog.entry_delete(moblog_id, entry_id),
        };
        Ok(call)
    }
}

/// Entry keywords.
#[derive(Subcommand)]
pub enum KeywordsCommand {
    /// Add keywords to an entry.
    Add {
        /// Entry ID.
        entry_id: i32,
        /// Comma-separated keywords.
        keywords: String,
    },
}

impl KeywordsCommand {
    pub fn build(self, catalog: &Catalog<'_>) -> Call {
        match self {
            Self::Add { entry_id, keywords } => catalog.add_keywords(entry_id, &keywords),
        }
    }
}
