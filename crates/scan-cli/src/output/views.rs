//! Human-oriented table layouts for review responses.

use chrono::{DateTime, Local, Utc};
use scan_core::entities::{DecisionRecord, Scan};
use scan_core::responses::{
    DecisionResponse, RecentResponse, ScanListResponse, StatusResponse, UndoResponse,
};
use scan_core::session::ReviewSummary;

use super::table::{TableOptions, render_fields, render_table};

/// A response that knows how to lay itself out as text tables.
pub trait TableView {
    fn table(&self, options: TableOptions) -> String;
}

/// Local wall-clock time, second precision.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn scan_fields(scan: &Scan) -> Vec<(&'static str, String)> {
    vec![
        ("Patient", scan.patient_name.clone()),
        ("Patient ID", scan.patient_id.clone()),
        ("Age", scan.age.to_string()),
        ("Gender", scan.gender.clone()),
        ("Scan Type", scan.scan_type.clone()),
        ("Body Part", scan.body_part.clone()),
        ("Scan Date", scan.scan_date.format("%Y-%m-%d").to_string()),
        ("Image URL", scan.image_url.clone()),
    ]
}

fn record_row(record: &DecisionRecord) -> Vec<String> {
    vec![
        record.patient_name.clone(),
        record.decision.label().to_string(),
        format_timestamp(record.recorded_at),
    ]
}

impl TableView for ReviewSummary {
    fn table(&self, options: TableOptions) -> String {
        render_fields(
            Some("Progress"),
            &[
                ("Reviewed", self.reviewed.to_string()),
                ("Healthy", self.healthy.to_string()),
                ("Sick", self.sick.to_string()),
                ("Remaining", self.remaining.to_string()),
            ],
            options,
        )
    }
}

impl TableView for StatusResponse {
    fn table(&self, options: TableOptions) -> String {
        let current = match &self.scan {
            Some(scan) => render_fields(Some("Current Scan"), &scan_fields(scan), options),
            None => render_fields(
                Some("Current Scan"),
                &[("Status", String::from("No scans remaining"))],
                options,
            ),
        };
        format!("{current}\n\n{}", self.summary.table(options))
    }
}

impl TableView for DecisionResponse {
    fn table(&self, options: TableOptions) -> String {
        format!(
            "Recorded {} for {} at {}.\n\n{}",
            self.recorded.decision.label().to_lowercase(),
            self.recorded.patient_name,
            format_timestamp(self.recorded.recorded_at),
            self.summary.table(options)
        )
    }
}

impl TableView for UndoResponse {
    fn table(&self, options: TableOptions) -> String {
        match &self.undone {
            Some(record) => format!(
                "Removed last decision for {} made at {}.\n\n{}",
                record.patient_name,
                format_timestamp(record.recorded_at),
                self.summary.table(options)
            ),
            None => String::from("No reviews to undo."),
        }
    }
}

impl TableView for RecentResponse {
    fn table(&self, options: TableOptions) -> String {
        // A zero limit lists nothing even when decisions exist.
        if self.reviews.is_empty() && self.limit > 0 {
            return String::from("No recent reviews yet.");
        }
        let rows = self.reviews.iter().map(record_row).collect::<Vec<_>>();
        let title = format!("Most Recent {} Reviews", self.reviews.len());
        render_table(
            Some(title.as_str()),
            &["patient", "decision", "reviewed at"],
            &rows,
            options,
        )
    }
}

impl TableView for ScanListResponse {
    fn table(&self, options: TableOptions) -> String {
        if self.scans.is_empty() {
            return format!("No scans loaded from {}.", self.source);
        }
        let rows = self
            .scans
            .iter()
            .map(|scan| {
                vec![
                    scan.id.clone(),
                    scan.patient_name.clone(),
                    scan.scan_type.clone(),
                    scan.body_part.clone(),
                    scan.scan_date.format("%Y-%m-%d").to_string(),
                ]
            })
            .collect::<Vec<_>>();
        let title = format!("{} scans from {}", self.total, self.source);
        render_table(
            Some(title.as_str()),
            &["id", "patient", "scan type", "body part", "scan date"],
            &rows,
            options,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use scan_core::enums::Decision;
    use scan_core::seed::default_scans;

    use super::*;

    const SUMMARY: ReviewSummary = ReviewSummary {
        reviewed: 2,
        healthy: 1,
        sick: 1,
        remaining: 3,
    };

    fn record() -> DecisionRecord {
        DecisionRecord {
            scan_id: "3".into(),
            patient_name: "Emma Davis".into(),
            decision: Decision::Healthy,
            recorded_at: Utc.with_ymd_and_hms(2024, 12, 25, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn status_shows_scan_fields_and_progress() {
        let status = StatusResponse {
            scan: default_scans().into_iter().nth(2),
            summary: SUMMARY,
        };
        let out = status.table(TableOptions::plain());
        assert!(out.starts_with("Current Scan"));
        assert!(out.contains("Emma Davis"));
        assert!(out.contains("Brain MRI"));
        assert!(out.contains("Progress"));
        assert!(out.contains("Remaining"));
    }

    #[test]
    fn exhausted_status_says_so() {
        let status = StatusResponse {
            scan: None,
            summary: SUMMARY,
        };
        assert!(status.table(TableOptions::plain()).contains("No scans remaining"));
    }

    #[test]
    fn decision_message_names_patient() {
        let response = DecisionResponse {
            recorded: record(),
            summary: SUMMARY,
        };
        let out = response.table(TableOptions::plain());
        assert!(out.starts_with("Recorded healthy for Emma Davis at "));
    }

    #[test]
    fn empty_undo_has_notice() {
        let response = UndoResponse {
            undone: None,
            summary: SUMMARY,
        };
        assert_eq!(response.table(TableOptions::plain()), "No reviews to undo.");
    }

    #[test]
    fn recent_lists_rows_with_title() {
        let response = RecentResponse {
            limit: 5,
            reviews: vec![record()],
        };
        let out = response.table(TableOptions::plain());
        assert!(out.starts_with("Most Recent 1 Reviews"));
        assert!(out.contains("Healthy"));
        assert!(!out.contains("healthy"));
    }

    #[test]
    fn zero_limit_shows_empty_table() {
        let response = RecentResponse {
            limit: 0,
            reviews: Vec::new(),
        };
        let out = response.table(TableOptions::plain());
        assert!(out.starts_with("Most Recent 0 Reviews"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn empty_recent_has_notice() {
        let response = RecentResponse {
            limit: 5,
            reviews: Vec::new(),
        };
        assert_eq!(response.table(TableOptions::plain()), "No recent reviews yet.");
    }
}
