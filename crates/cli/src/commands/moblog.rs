//! Moblog listing and settings commands.

use clap::Subcommand;
use moblog::{AllowComments, ApprovalType, Call, Catalog};

/// Moblog listing and settings.
#[derive(Subcommand)]
pub enum MoblogCommand {
    /// List your moblogs.
    Mine,

    /// List community moblogs.
    Community {
        /// A count, a date, or "all". The 30 most recent when omitted.
        #[arg(long)]
        which: Option<String>,
    },

    /// Replace all settings of a moblog.
    Update {
        /// Moblog ID.
        moblog_id: i32,

        /// Domain name of the moblog.
        #[arg(long)]
        domain: String,

        /// Secret word of the moblog's posting address.
        #[arg(long)]
        secret_word: String,

        /// Title of the moblog.
        #[arg(long)]
        title: String,

        /// Description shown on the moblog.
        #[arg(long)]
        description: String,

        /// C (community, posts need approval) or P (private).
        #[arg(long, default_value_t = ApprovalType::PRIVATE)]
        approval_type: char,

        /// Y or N.
        #[arg(long, default_value_t = AllowComments::YES)]
        allow_comments: char,
    },

    /// Change a moblog's title.
    ChangeTitle {
        /// Moblog ID.
        moblog_id: i32,
        /// New title.
        title: String,
    },

    /// Change a moblog's description.
    ChangeText {
        /// Moblog ID.
        moblog_id: i32,
        /// New description.
        text: String,
    },

    /// Change a moblog's domain name.
    ChangeDomain {
        /// Moblog ID.
        moblog_id: i32,
        /// New domain name.
        domain: String,
    },

    /// Change a moblog's secret word.
    ChangeSecretWord {
        /// Moblog ID.
        moblog_id: i32,
        /// New secret word.
        secret_word: String,
    },
}

impl MoblogCommand {
    pub fn build(self, catalog: &Catalog<'_>) -> Call {
        match self {
            Self::Mine => catalog.get_my_moblogs(),
            Self::Community { which } => catalog.get_community_moblogs(which.as_deref()),
            Self::Update {
                moblog_id,
                domain,
                secret_word,
                title,
                description,
                approval_type,
                allow_comments,
            } => catalog.update(
                moblog_id,
                &domain,
                &secret_word,
                &title,
                &description,
                approval_type,
                allow_comments,
            ),
            Self::ChangeTitle { moblog_id, title } => catalog.change_title(moblog_id, &title),
            Self::ChangeText { moblog_id, text } => catalog.change_text(moblog_id, &text),
            Self::ChangeDomain { moblog_id, domain } => catalog.change_domain(moblog_id, &domain),
            Self::ChangeSecretWord {
                moblog_id,
                secret_word,
            } => catalog.change_secret_word(moblog_id, &secret_word),
        }
    }
}
