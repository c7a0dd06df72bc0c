//! Repository modules.
//!
//! `story` and `quiz` add methods to `SciQuestService`; `profile` adds child
//! profile queries to `SqDb`.

pub mod profile;
pub mod quiz;
pub mod story;
