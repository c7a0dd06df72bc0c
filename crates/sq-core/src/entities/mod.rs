//! Entity structs for all SciQuest domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Story and
//! quiz shapes serialize with camelCase keys so stored records match what the
//! web front-end reads.

mod panel;
mod profile;
mod question;
mod story;

pub use panel::{Panel, StoryUnit};
pub use profile::ChildProfile;
pub use question::{Question, QuizResponse, QuizUnit};
pub use story::{GenerateStoryParams, StoryRecord};
