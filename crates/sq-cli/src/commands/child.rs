use anyhow::bail;
use serde::Serialize;
use sq_core::entities::ChildProfile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChildCommands;
use crate::context::AppContext;
use crate::output::output;

/// A profile plus the name and avatar glyph shown for it.
#[derive(Debug, Serialize)]
struct ChildView {
    display_name: String,
    avatar: String,
    #[serde(flatten)]
    profile: ChildProfile,
}

impl From<ChildProfile> for ChildView {
    fn from(profile: ChildProfile) -> Self {
        Self {
            display_name: profile.display_name().to_string(),
            avatar: profile
                .avatar_url
                .clone()
                .unwrap_or_else(|| profile.fallback_avatar().to_string()),
            profile,
        }
    }
}

/// Handle `sciquest child`.
pub async fn handle(
    action: &ChildCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = ctx.profile_db()?;
    match action {
        ChildCommands::List { parent } => {
            let children: Vec<ChildView> = db
                .list_children(parent)
                .await?
                .into_iter()
                .map(ChildView::from)
                .collect();
            output(&children, flags.format)
        }
        ChildCommands::Get { id, parent } => match db.get_child(parent, id).await? {
            Some(profile) => output(&ChildView::from(profile), flags.format),
            None => bail!("child '{id}' not found or not linked to parent '{parent}'"),
        },
    }
}
