use scan_core::responses::ScanListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_view;

/// Handle `scan-review scans`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_view(&list(ctx)?, flags.format)
}

fn list(ctx: &AppContext) -> anyhow::Result<ScanListResponse> {
    let scans = ctx.load_scans()?;
    Ok(ScanListResponse {
        source: ctx.source.describe(),
        total: scans.len(),
        scans,
    })
}

#[cfg(test)]
mod tests {
    use scan_config::ScanReviewConfig;

    use super::list;
    use crate::context::{AppContext, ScanSource};

    #[test]
    fn lists_built_in_scans_in_order() {
        let ctx = AppContext::new(ScanReviewConfig::default(), ScanSource::BuiltIn);
        let response = list(&ctx).expect("list");

        assert_eq!(response.total, 5);
        assert_eq!(response.source, "built-in demo scans");
        let ids: Vec<&str> = response.scans.iter().map(|scan| scan.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }
}
