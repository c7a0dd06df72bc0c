use clap::Subcommand;

use crate::cli::subcommands::{ChildCommands, StoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List catalog topics.
    Topics,
    /// Generate or fetch stories.
    Story {
        #[command(subcommand)]
        action: StoryCommands,
    },
    /// Quiz for a story (unknown ids get the default topic's quiz).
    Quiz {
        /// Story ID, or demo-1
        story_id: String,
    },
    /// View a parent's child profiles.
    Child {
        #[command(subcommand)]
        action: ChildCommands,
    },
}
