//! Symptom Tracker: log collection, persistence and aggregation.
//!
//! Logs live in memory as a flat list sorted by date (newest first) and are
//! mirrored to the store under `symptomLogs` after every mutation. The
//! calendar index and frequency chart are rebuilt from that list on each
//! read; there is no persistent index.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Change, Symptom, SymptomLog};
use crate::store::{self, keys, SharedStore};

pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 10;
pub const DEFAULT_SEVERITY: u8 = 5;

/// Window of the frequency chart, in days.
pub const FREQUENCY_WINDOW_DAYS: i64 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("Please select at least one symptom.")]
    NoSymptomsSelected,

    #[error("Severity must be between 1 and 10, got {0}")]
    SeverityOutOfRange(u8),
}

// ═══════════════════════════════════════════
// Form-side types
// ═══════════════════════════════════════════

/// Colour band for a severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    Low,
    Moderate,
    High,
}

impl SeverityBand {
    pub fn for_level(level: u8) -> Self {
        if level >= 7 {
            Self::High
        } else if level >= 4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Add `symptom` if it is not selected, remove it if it is. Order of the
/// remaining selection is preserved.
pub fn toggle_symptom(selection: &mut Vec<Symptom>, symptom: Symptom) {
    if let Some(pos) = selection.iter().position(|s| *s == symptom) {
        selection.remove(pos);
    } else {
        selection.push(symptom);
    }
}

/// The editable fields of a log, as captured by the tracker form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDraft {
    pub date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub severity: u8,
    pub notes: Option<String>,
}

impl LogDraft {
    /// Empty form for a new entry on `date`.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            symptoms: Vec::new(),
            severity: DEFAULT_SEVERITY,
            notes: None,
        }
    }

    /// Form pre-filled from an existing log.
    pub fn from_log(log: &SymptomLog) -> Self {
        Self {
            date: log.date,
            symptoms: log.symptoms.clone(),
            severity: log.severity,
            notes: log.notes.clone(),
        }
    }

    fn validate(&self) -> Result<(), JournalError> {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&self.severity) {
            return Err(JournalError::SeverityOutOfRange(self.severity));
        }
        if self.symptoms.is_empty() {
            return Err(JournalError::NoSymptomsSelected);
        }
        Ok(())
    }

    fn into_log(self, id: String) -> SymptomLog {
        let mut symptoms: Vec<Symptom> = Vec::with_capacity(self.symptoms.len());
        for s in self.symptoms {
            if !symptoms.contains(&s) {
                symptoms.push(s);
            }
        }
        SymptomLog {
            id,
            date: self.date,
            symptoms,
            severity: self.severity,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// What an edit did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Updated,
    /// The edit deselected every symptom, so the log was deleted.
    Removed,
    NotFound,
}

/// One bar of the frequency chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCount {
    pub symptom: Symptom,
    pub count: u32,
}

// ═══════════════════════════════════════════
// Aggregation
// ═══════════════════════════════════════════

/// Group logs by calendar day. Within a day, logs keep collection order.
pub fn index_by_date(logs: &[SymptomLog]) -> BTreeMap<NaiveDate, Vec<&SymptomLog>> {
    let mut index: BTreeMap<NaiveDate, Vec<&SymptomLog>> = BTreeMap::new();
    for log in logs {
        index.entry(log.date).or_default().push(log);
    }
    index
}

/// Per-symptom occurrence counts over logs dated on or after
/// `as_of - window_days`, most frequent first. Ties keep the order in which
/// the symptoms were first encountered. Empty when nothing is in the window.
pub fn frequency(logs: &[SymptomLog], window_days: i64, as_of: NaiveDate) -> Vec<SymptomCount> {
    let cutoff = as_of - Duration::days(window_days);

    let mut counts: Vec<SymptomCount> = Vec::new();
    for log in logs.iter().filter(|l| l.date >= cutoff) {
        for symptom in &log.symptoms {
            match counts.iter_mut().find(|c| c.symptom == *symptom) {
                Some(entry) => entry.count += 1,
                None => counts.push(SymptomCount {
                    symptom: *symptom,
                    count: 1,
                }),
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Today's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ═══════════════════════════════════════════
// Journal
// ═══════════════════════════════════════════

pub struct SymptomJournal {
    store: SharedStore,
    logs: Vec<SymptomLog>,
}

impl SymptomJournal {
    /// Load logs from the store. Absent or unreadable data yields an empty journal.
    pub fn load(store: SharedStore) -> Self {
        let logs: Vec<SymptomLog> =
            store::load_json(store.as_ref(), keys::SYMPTOM_LOGS).unwrap_or_default();
        tracing::debug!(count = logs.len(), "Loaded symptom logs");
        Self { store, logs }
    }

    /// All logs, newest date first.
    pub fn logs(&self) -> &[SymptomLog] {
        &self.logs
    }

    pub fn get(&self, id: &str) -> Option<&SymptomLog> {
        self.logs.iter().find(|l| l.id == id)
    }

    /// Save a new log. Rejected before any mutation if no symptom is
    /// selected or severity is out of range. Returns the new id.
    pub fn add(&mut self, draft: LogDraft) -> Result<String, JournalError> {
        draft.validate()?;

        let id = Uuid::now_v7().to_string();
        self.logs.push(draft.into_log(id.clone()));
        self.sort_and_persist();
        tracing::info!(log_id = %id, "Symptom log created");
        Ok(id)
    }

    /// Replace every field of log `id` except the id itself. A draft with no
    /// symptoms deletes the log instead.
    pub fn update(&mut self, id: &str, draft: LogDraft) -> Result<SaveOutcome, JournalError> {
        let Some(pos) = self.logs.iter().position(|l| l.id == id) else {
            tracing::debug!(log_id = id, "Update of unknown symptom log ignored");
            return Ok(SaveOutcome::NotFound);
        };

        if draft.symptoms.is_empty() {
            self.logs.remove(pos);
            self.persist();
            tracing::info!(log_id = id, "Symptom log removed by deselecting all symptoms");
            return Ok(SaveOutcome::Removed);
        }

        draft.validate()?;
        // Re-appended so the edited log sorts after its same-date siblings.
        self.logs.remove(pos);
        self.logs.push(draft.into_log(id.to_string()));
        self.sort_and_persist();
        Ok(SaveOutcome::Updated)
    }

    pub fn delete(&mut self, id: &str) -> Change {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);
        if self.logs.len() == before {
            tracing::debug!(log_id = id, "Delete of unknown symptom log ignored");
            return Change::NotFound;
        }
        self.persist();
        Change::Applied
    }

    /// Logs recorded for `date`, in collection order.
    pub fn logs_on(&self, date: NaiveDate) -> Vec<&SymptomLog> {
        self.logs.iter().filter(|l| l.date == date).collect()
    }

    /// Whether the calendar should mark `date`.
    pub fn has_logs_on(&self, date: NaiveDate) -> bool {
        self.logs.iter().any(|l| l.date == date)
    }

    pub fn index_by_date(&self) -> BTreeMap<NaiveDate, Vec<&SymptomLog>> {
        index_by_date(&self.logs)
    }

    pub fn frequency(&self, window_days: i64, as_of: NaiveDate) -> Vec<SymptomCount> {
        frequency(&self.logs, window_days, as_of)
    }

    /// The chart as shown: last 30 days up to today.
    pub fn recent_frequency(&self) -> Vec<SymptomCount> {
        self.frequency(FREQUENCY_WINDOW_DAYS, today())
    }

    fn sort_and_persist(&mut self) {
        self.logs.sort_by(|a, b| b.date.cmp(&a.date));
        self.persist();
    }

    fn persist(&self) {
        store::save_json(self.store.as_ref(), keys::SYMPTOM_LOGS, &self.logs);
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
