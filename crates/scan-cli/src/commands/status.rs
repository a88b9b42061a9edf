use scan_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_view;

/// Handle `scan-review status`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = ctx.session_key(None);
    let session = ctx.session(&key)?;
    output_view(&StatusResponse::from_session(session), flags.format)
}
