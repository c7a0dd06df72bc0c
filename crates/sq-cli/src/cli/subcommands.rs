use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum StoryCommands {
    /// Generate and store a new story.
    Generate {
        /// Topic id (photosynthesis, space, dinosaurs); anything else uses photosynthesis
        #[arg(long)]
        topic: Option<String>,
        /// Grade band, inserted into the title as given
        #[arg(long)]
        grade: Option<String>,
        /// Avatar id
        #[arg(long)]
        avatar: Option<String>,
        /// Guide id
        #[arg(long)]
        guide: Option<String>,
    },
    /// Fetch a story by id.
    Get {
        /// Story ID, or demo-1
        id: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ChildCommands {
    /// List a parent's student profiles, newest first.
    List {
        /// Parent profile ID
        #[arg(long)]
        parent: String,
    },
    /// Show one child profile.
    Get {
        /// Child profile ID
        id: String,
        /// Parent profile ID
        #[arg(long)]
        parent: String,
    },
}
