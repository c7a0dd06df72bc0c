use sq_core::catalog;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `sciquest topics`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog::topics(), flags.format)
}
