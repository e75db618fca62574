use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use endo_core::models::template::TemplateScope;
use endo_export::images::ImageSlot;

#[derive(Debug, Parser)]
#[command(
    name = "endonote",
    version,
    about = "Endodontic SOAP notes, referral letters and referral documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration directory (default: the platform config dir).
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the SOAP note for a note file.
    Soap(NoteArgs),

    /// Print the referral letter for a note file.
    Letter {
        #[command(flatten)]
        note: NoteArgs,

        /// Include post-operative instructions in the completion section.
        #[arg(long = "include-post-op")]
        include_post_op: bool,
    },

    /// Write the referral document as DOCX.
    Export {
        #[command(flatten)]
        note: NoteArgs,

        /// Output file (default: the configured output directory).
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Manage saved note templates.
    #[command(subcommand)]
    Template(TemplateCommand),

    /// Store or clear an image in the referral document settings.
    Image {
        #[arg(value_enum)]
        slot: ImageSlotArg,

        /// Image file (PNG or JPEG).
        #[arg(value_name = "FILE", required_unless_present = "clear")]
        path: Option<PathBuf>,

        /// Empty the slot instead of loading a file.
        #[arg(long, conflicts_with = "path")]
        clear: bool,

        /// Radiograph slot, counted from 1.
        #[arg(long, default_value_t = 1)]
        index: usize,
    },

    /// Print the resolved configuration.
    Config,
}

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note data as JSON.
    #[arg(value_name = "NOTE")]
    pub note: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// List templates, optionally only those matching a note's visit.
    List {
        #[arg(long, value_name = "NOTE")]
        matching: Option<PathBuf>,
    },

    /// Save part or all of a note as a template.
    Save {
        #[command(flatten)]
        note: NoteArgs,

        #[arg(long)]
        name: String,

        /// Sections to save; repeat for several. Defaults to the whole note.
        #[arg(long, value_enum)]
        scope: Vec<ScopeArg>,

        /// Tag the template with the note's visit type, tooth type and
        /// procedures.
        #[arg(long)]
        tagged: bool,

        /// Replace an existing template with the same name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Apply a template to a note and print the resulting note JSON.
    Apply {
        #[command(flatten)]
        note: NoteArgs,

        #[arg(long)]
        name: String,

        /// Write the result here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    Rename {
        from: String,
        to: String,
    },

    Delete {
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    All,
    Subjective,
    Objective,
    Assessment,
    Plan,
    Referral,
}

impl From<ScopeArg> for TemplateScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => TemplateScope::All,
            ScopeArg::Subjective => TemplateScope::Subjective,
            ScopeArg::Objective => TemplateScope::Objective,
            ScopeArg::Assessment => TemplateScope::Assessment,
            ScopeArg::Plan => TemplateScope::Plan,
            ScopeArg::Referral => TemplateScope::Referral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageSlotArg {
    Logo,
    Footer,
    Signature,
    Radiograph,
}

impl ImageSlotArg {
    /// `index` counts radiograph slots from 1.
    pub fn slot(self, index: usize) -> ImageSlot {
        match self {
            ImageSlotArg::Logo => ImageSlot::Logo,
            ImageSlotArg::Footer => ImageSlot::Footer,
            ImageSlotArg::Signature => ImageSlot::Signature,
            ImageSlotArg::Radiograph => ImageSlot::Radiograph(index.saturating_sub(1)),
        }
    }
}
