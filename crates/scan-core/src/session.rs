//! Review session state machine.
//!
//! A session walks a fixed queue of scans in order. Every recorded decision
//! appends to the log and advances the cursor by one; every undo pops the log
//! tail and moves the cursor back by one, so `cursor == log.len()` holds
//! after every operation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::entities::{DecisionRecord, Scan};
use crate::enums::Decision;
use crate::errors::ReviewError;

/// Number of records returned by [`ReviewSession::recent`] when the caller has no preference.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Point-in-time progress counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewSummary {
    pub reviewed: usize,
    pub healthy: usize,
    pub sick: usize,
    pub remaining: usize,
}

/// Review progress over one ordered set of scans.
#[derive(Debug)]
pub struct ReviewSession<C: Clock = SystemClock> {
    scans: Vec<Scan>,
    cursor: usize,
    log: Vec<DecisionRecord>,
    clock: C,
}

impl ReviewSession<SystemClock> {
    /// Start a session stamped with the host clock.
    #[must_use]
    pub fn new(scans: Vec<Scan>) -> Self {
        Self::with_clock(scans, SystemClock)
    }
}

impl<C: Clock> ReviewSession<C> {
    /// Start a session that reads decision timestamps from `clock`.
    #[must_use]
    pub const fn with_clock(scans: Vec<Scan>, clock: C) -> Self {
        Self {
            scans,
            cursor: 0,
            log: Vec::new(),
            clock,
        }
    }

    /// The scan awaiting a decision, or `None` once the queue is exhausted.
    #[must_use]
    pub fn current_item(&self) -> Option<&Scan> {
        self.scans.get(self.cursor)
    }

    /// Scans not yet decided.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.scans.len().saturating_sub(self.cursor)
    }

    /// Record `decision` for the current scan and advance to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::EmptyQueue`] when every scan has been decided.
    /// State is left untouched in that case.
    pub fn record_decision(&mut self, decision: Decision) -> Result<DecisionRecord, ReviewError> {
        let Some(scan) = self.current_item() else {
            tracing::debug!(%decision, "record rejected: queue is empty");
            return Err(ReviewError::EmptyQueue);
        };

        let record = DecisionRecord {
            scan_id: scan.id.clone(),
            patient_name: scan.patient_name.clone(),
            decision,
            recorded_at: self.clock.now(),
        };
        self.log.push(record.clone());
        self.cursor += 1;

        tracing::debug!(
            scan = %record.scan_id,
            %decision,
            remaining = self.remaining(),
            "decision recorded"
        );
        Ok(record)
    }

    /// Shorthand for `record_decision(Decision::Healthy)`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::EmptyQueue`] when every scan has been decided.
    pub fn mark_healthy(&mut self) -> Result<DecisionRecord, ReviewError> {
        self.record_decision(Decision::Healthy)
    }

    /// Shorthand for `record_decision(Decision::Sick)`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::EmptyQueue`] when every scan has been decided.
    pub fn mark_sick(&mut self) -> Result<DecisionRecord, ReviewError> {
        self.record_decision(Decision::Sick)
    }

    /// Remove the most recent decision and re-present its scan.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<DecisionRecord> {
        let record = self.log.pop()?;
        self.cursor = self.cursor.saturating_sub(1);
        tracing::debug!(scan = %record.scan_id, decision = %record.decision, "decision undone");
        Some(record)
    }

    #[must_use]
    pub fn healthy_count(&self) -> usize {
        self.count(Decision::Healthy)
    }

    #[must_use]
    pub fn sick_count(&self) -> usize {
        self.count(Decision::Sick)
    }

    fn count(&self, decision: Decision) -> usize {
        self.log
            .iter()
            .filter(|record| record.decision == decision)
            .count()
    }

    /// Progress counts computed from the current log.
    #[must_use]
    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary {
            reviewed: self.log.len(),
            healthy: self.healthy_count(),
            sick: self.sick_count(),
            remaining: self.remaining(),
        }
    }

    /// Up to `limit` records, newest first. A `limit` of zero yields nothing.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &DecisionRecord> + '_ {
        self.log.iter().rev().take(limit)
    }

    /// All scans in queue order.
    #[must_use]
    pub fn items(&self) -> &[Scan] {
        &self.scans
    }

    /// Index of the next scan to review.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Recorded decisions, oldest first.
    #[must_use]
    pub fn log(&self) -> &[DecisionRecord] {
        &self.log
    }

    /// Total number of scans in the queue.
    #[must_use]
    pub fn total(&self) -> usize {
        self.scans.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_item().is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FixedClock;

    fn scan(id: &str, name: &str) -> Scan {
        Scan {
            id: id.into(),
            patient_id: format!("PT-{id}"),
            patient_name: name.into(),
            age: 40,
            gender: "Female".into(),
            scan_type: "CT Scan".into(),
            scan_date: NaiveDate::from_ymd_opt(2024, 12, 24).unwrap(),
            image_url: format!("https://example.test/{id}.jpg"),
            body_part: "Chest".into(),
        }
    }

    fn five_scans() -> Vec<Scan> {
        ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .map(|(i, name)| scan(&(i + 1).to_string(), name))
            .collect()
    }

    #[test]
    fn fresh_session_presents_first_scan() {
        let session = ReviewSession::new(five_scans());
        assert_eq!(session.current_item().map(|s| s.id.as_str()), Some("1"));
        assert_eq!(session.remaining(), 5);
        assert_eq!(session.cursor(), 0);
        assert!(session.log().is_empty());
    }

    #[test]
    fn current_item_is_stable_between_mutations() {
        let session = ReviewSession::new(five_scans());
        assert_eq!(session.current_item(), session.current_item());
    }

    #[test]
    fn record_captures_scan_and_clock() {
        let at = Utc.with_ymd_and_hms(2024, 12, 24, 10, 30, 0).unwrap();
        let mut session = ReviewSession::with_clock(five_scans(), FixedClock::new(at));

        let record = session.record_decision(Decision::Sick).unwrap();

        assert_eq!(
            record,
            DecisionRecord {
                scan_id: "1".into(),
                patient_name: "A".into(),
                decision: Decision::Sick,
                recorded_at: at,
            }
        );
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.current_item().map(|s| s.id.as_str()), Some("2"));
    }

    #[test]
    fn mark_helpers_record_matching_decision() {
        let mut session = ReviewSession::new(five_scans());
        assert_eq!(session.mark_healthy().unwrap().decision, Decision::Healthy);
        assert_eq!(session.mark_sick().unwrap().decision, Decision::Sick);
        assert_eq!(session.healthy_count(), 1);
        assert_eq!(session.sick_count(), 1);
    }

    #[test]
    fn empty_queue_rejects_without_mutation() {
        let mut session = ReviewSession::new(vec![scan("1", "A")]);
        session.mark_healthy().unwrap();

        let err = session.mark_sick().unwrap_err();

        assert_eq!(err, ReviewError::EmptyQueue);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.log().len(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn session_without_scans_is_complete() {
        let mut session = ReviewSession::new(Vec::new());
        assert!(session.is_complete());
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.mark_healthy(), Err(ReviewError::EmptyQueue));
    }

    #[test]
    fn undo_on_fresh_session_is_noop() {
        let mut session = ReviewSession::new(five_scans());
        assert_eq!(session.undo(), None);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.remaining(), 5);
    }

    #[test]
    fn undo_returns_most_recent_and_represents_scan() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_healthy().unwrap();
        let sick = session.mark_sick().unwrap();

        let undone = session.undo().unwrap();

        assert_eq!(undone, sick);
        assert_eq!(session.current_item().map(|s| s.id.as_str()), Some("2"));
        assert_eq!(session.cursor(), session.log().len());
    }

    #[test]
    fn undo_repeats_one_step_at_a_time() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_healthy().unwrap();
        session.mark_sick().unwrap();

        assert_eq!(session.undo().map(|r| r.scan_id), Some("2".into()));
        assert_eq!(session.undo().map(|r| r.scan_id), Some("1".into()));
        assert_eq!(session.undo(), None);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn undo_after_completion_reopens_last_scan() {
        let mut session = ReviewSession::new(vec![scan("1", "A"), scan("2", "B")]);
        session.mark_healthy().unwrap();
        session.mark_healthy().unwrap();
        assert!(session.is_complete());

        session.undo();

        assert_eq!(session.current_item().map(|s| s.id.as_str()), Some("2"));
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn summary_reflects_current_log() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_healthy().unwrap();
        session.mark_sick().unwrap();
        session.mark_healthy().unwrap();

        assert_eq!(
            session.summary(),
            ReviewSummary {
                reviewed: 3,
                healthy: 2,
                sick: 1,
                remaining: 2,
            }
        );

        session.undo();
        assert_eq!(session.summary().healthy, 1);
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let start = Utc.with_ymd_and_hms(2024, 12, 24, 9, 0, 0).unwrap();
        let clock = FixedClock::stepping(start, Duration::seconds(1));
        let mut session = ReviewSession::with_clock(five_scans(), clock);
        for _ in 0..4 {
            session.mark_healthy().unwrap();
        }

        let names: Vec<&str> = session
            .recent(3)
            .map(|record| record.patient_name.as_str())
            .collect();
        assert_eq!(names, vec!["D", "C", "B"]);

        let times: Vec<_> = session.recent(2).map(|r| r.recorded_at).collect();
        assert!(times[0] > times[1]);
    }

    #[test]
    fn recent_with_large_limit_returns_everything() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_sick().unwrap();
        assert_eq!(session.recent(DEFAULT_RECENT_LIMIT).count(), 1);
        assert_eq!(session.recent(usize::MAX).count(), 1);
    }

    #[test]
    fn recent_zero_is_empty() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_sick().unwrap();
        assert_eq!(session.recent(0).count(), 0);
    }

    #[test]
    fn recent_is_recomputed_each_call() {
        let mut session = ReviewSession::new(five_scans());
        session.mark_sick().unwrap();
        assert_eq!(session.recent(5).count(), 1);
        session.mark_sick().unwrap();
        assert_eq!(session.recent(5).count(), 2);
        session.undo();
        session.undo();
        assert_eq!(session.recent(5).count(), 0);
    }

    #[test]
    fn denormalized_name_survives_undo_and_rerecord() {
        let mut session = ReviewSession::new(five_scans());
        let first = session.mark_healthy().unwrap();
        session.undo();
        let second = session.mark_sick().unwrap();

        assert_eq!(first.patient_name, second.patient_name);
        assert_eq!(second.decision, Decision::Sick);
        assert_eq!(session.log(), &[second]);
    }
}
