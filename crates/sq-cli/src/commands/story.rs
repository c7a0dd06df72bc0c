use anyhow::bail;
use sq_core::entities::GenerateStoryParams;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StoryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sciquest story`.
pub async fn handle(
    action: &StoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StoryCommands::Generate {
            topic,
            grade,
            avatar,
            guide,
        } => {
            let params = build_params(
                topic.as_deref(),
                grade.as_deref(),
                avatar.as_deref(),
                guide.as_deref(),
                &ctx.config.general.default_grade,
            );
            let story = ctx.service.generate_story(&params).await?;
            output(&story, flags.format)?;
            if !flags.quiet {
                eprintln!("stored story {} in {:?} store", story.id, ctx.config.store.backend);
            }
            Ok(())
        }
        StoryCommands::Get { id } => match ctx.service.get_story_by_id(id).await? {
            Some(story) => output(&story, flags.format),
            None => bail!("story '{id}' not found"),
        },
    }
}

/// Assemble generation parameters. A missing grade falls back to the
/// configured default; an empty default leaves it unset.
fn build_params(
    topic: Option<&str>,
    grade: Option<&str>,
    avatar: Option<&str>,
    guide: Option<&str>,
    default_grade: &str,
) -> GenerateStoryParams {
    let grade = grade
        .or_else(|| (!default_grade.is_empty()).then_some(default_grade))
        .map(str::to_string);
    GenerateStoryParams {
        topic_id: topic.map(str::to_string),
        grade,
        avatar_id: avatar.map(str::to_string),
        guide_id: guide.map(str::to_string),
    }
}
