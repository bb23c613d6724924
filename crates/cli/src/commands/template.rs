//! Template commands.

use clap::Subcommand;
use moblog::{Call, Catalog};

/// Moblog templates.
#[derive(Subcommand)]
pub enum TemplateCommand {
    /// Replace the HTML of one template section.
    UpdateSection {
        /// Moblog ID.
        moblog_id: i32,

        /// header, footer, frontpage, details, entry, comment or result.
        section_id: String,

        /// HTML for the section.
        html_code: String,
    },

    /// Apply a graphic set and layout from the template library.
    Set {
        /// Moblog ID.
        moblog_id: i32,
        /// Graphic set ID.
        graphic_id: i32,
        /// Layout ID.
        layout_id: i32,
    },
}

impl TemplateCommand {
    pub fn build(self, catalog: &Catalog<'_>) -> Call {
        match self {
            Self::UpdateSection {
                moblog_id,
                section_id,
                html_code,
            } => catalog.template_update_section(moblog_id, &section_id, &html_code),
            Self::Set {
                moblog_id,
                graphic_id,
                layout_id,
            } => catalog.set_template(moblog_id, graphic_id, layout_id),
        }
    }
}
