use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sciquest quiz <story-id>`.
pub async fn handle(story_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let quiz = ctx.service.get_quiz_for_story(story_id).await?;
    output(&quiz, flags.format)
}
