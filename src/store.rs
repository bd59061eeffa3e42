//! Flat-file dataset access: the JSON loader and the multi-day/single-day
//! attendance resolver every report endpoint goes through.

use std::fs;
use std::path::PathBuf;

use actix_web::{HttpResponse, http::StatusCode};
use derive_more::{Display, Error};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::model::attendance::{AttendanceRecord, MultiDayFile, SingleDayFile};
use crate::model::employee::EmployeesFile;
use crate::model::project::ProjectsFile;

pub const EMPLOYEES_FILE: &str = "employees.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const ATTENDANCE_FILE: &str = "attendance.json";
pub const MULTI_DAY_FILE: &str = "attendance_multi_day.json";

#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display(fmt = "Data file {} not found", name)]
    DatasetNotFound { name: String },

    #[display(fmt = "Failed to read {}: {}", name, source)]
    Io {
        name: String,
        source: std::io::Error,
    },

    #[display(fmt = "Failed to parse {}: {}", name, source)]
    Malformed {
        name: String,
        source: serde_json::Error,
    },
}

impl actix_web::ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::DatasetNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            StoreError::DatasetNotFound { .. } => self.to_string(),
            _ => "Internal Server Error".to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}

/// A day's attendance as normalized by [`DataStore::resolve_day`]. The date
/// is whatever the matched dataset recorded, never fabricated; endpoints
/// prefer the caller's requested date when echoing one back.
#[derive(Debug, Default)]
pub struct ResolvedDay {
    pub date: Option<String>,
    pub records: Vec<AttendanceRecord>,
}

/// Read-only view over the data directory. Constructed once from config and
/// shared via app data; every call re-reads from disk, nothing is cached.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.root.join(name);
        if !path.exists() {
            return Err(StoreError::DatasetNotFound { name: name.into() });
        }
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            name: name.into(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            name: name.into(),
            source,
        })
    }

    pub fn employees(&self) -> Result<EmployeesFile, StoreError> {
        self.load(EMPLOYEES_FILE)
    }

    pub fn projects(&self) -> Result<ProjectsFile, StoreError> {
        self.load(PROJECTS_FILE)
    }

    /// Locate the attendance records for `requested` (or "today" when no
    /// date is given) across both storage generations. Ordered probes, each
    /// tried only when the previous one yielded nothing; a probe hitting a
    /// missing or unreadable file counts as yielding nothing.
    ///
    /// 1. Multi-day file, `{days, latest_date}` dialect: exact-date scan
    ///    for `requested`, falling back to the `latest_date` pointer.
    /// 2. Multi-day file, bare bucket list: exact-date scan, only when the
    ///    caller named a date.
    /// 3. Single-day file, either dialect.
    /// 4. No requested date and still nothing: last bucket of the multi-day
    ///    file, for generators that forgot the `latest_date` bookkeeping.
    ///
    /// Total exhaustion is an empty day, never an error.
    pub fn resolve_day(&self, requested: Option<&str>) -> ResolvedDay {
        let multi_day = self.load::<MultiDayFile>(MULTI_DAY_FILE).ok();

        if let Some(day) = multi_day.as_ref().and_then(|m| probe_multi_day(m, requested)) {
            debug!(date = ?day.date, records = day.records.len(), "resolved from multi-day file");
            return day;
        }

        if let Some(day) = self.probe_single_day() {
            debug!(date = ?day.date, records = day.records.len(), "resolved from single-day file");
            return day;
        }

        if requested.is_none() {
            if let Some(day) = multi_day.as_ref().and_then(probe_last_bucket) {
                debug!(date = ?day.date, "resolved from trailing multi-day bucket");
                return day;
            }
        }

        debug!(requested = ?requested, "no attendance source matched");
        ResolvedDay::default()
    }

    fn probe_single_day(&self) -> Option<ResolvedDay> {
        match self.load::<SingleDayFile>(ATTENDANCE_FILE).ok()? {
            SingleDayFile::Keyed {
                date,
                attendance_records,
            } => Some(ResolvedDay {
                date,
                records: attendance_records,
            }),
            SingleDayFile::Bare(records) => Some(ResolvedDay {
                date: None,
                records,
            }),
        }
    }
}

fn probe_multi_day(file: &MultiDayFile, requested: Option<&str>) -> Option<ResolvedDay> {
    let target = match file {
        MultiDayFile::Keyed { latest_date, .. } => requested.or(latest_date.as_deref()),
        // A bare bucket list carries no latest pointer, so only an explicit
        // date can be matched against it.
        MultiDayFile::Bare(_) => requested,
    }?;

    file.buckets()
        .iter()
        .find(|bucket| bucket.date.as_deref() == Some(target))
        .map(|bucket| ResolvedDay {
            date: bucket.date.clone(),
            records: bucket.attendance_records.clone(),
        })
}

fn probe_last_bucket(file: &MultiDayFile) -> Option<ResolvedDay> {
    file.buckets().last().map(|bucket| ResolvedDay {
        date: bucket.date.clone(),
        records: bucket.attendance_records.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, DataStore) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let store = DataStore::new(dir.path());
        (dir, store)
    }

    const MULTI_DAY: &str = r#"{
        "days": [
            {"date": "2025-12-01", "attendance_records": [
                {"employee_id": "EMP001", "checkin_time": "09:00", "checkout_time": "18:00"}
            ]},
            {"date": "2025-12-02", "attendance_records": [
                {"employee_id": "EMP002", "checkin_time": "10:00", "checkout_time": "20:30"},
                {"employee_id": "EMP003", "checkin_time": "09:30", "checkout_time": "19:00"}
            ]}
        ],
        "latest_date": "2025-12-02"
    }"#;

    const SINGLE_DAY: &str = r#"{
        "date": "2025-11-15",
        "attendance_records": [
            {"employee_id": "EMP009", "checkin_time": "08:45", "checkout_time": "17:30"}
        ]
    }"#;

    #[test]
    fn no_date_uses_latest_pointer() {
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, MULTI_DAY)]);
        let day = store.resolve_day(None);
        assert_eq!(day.date.as_deref(), Some("2025-12-02"));
        assert_eq!(day.records.len(), 2);
        assert_eq!(day.records[0].employee_id, "EMP002");
    }

    #[test]
    fn explicit_date_overrides_latest_pointer() {
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, MULTI_DAY)]);
        let day = store.resolve_day(Some("2025-12-01"));
        assert_eq!(day.date.as_deref(), Some("2025-12-01"));
        assert_eq!(day.records.len(), 1);
    }

    #[test]
    fn unmatched_date_with_only_multi_day_is_empty() {
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, MULTI_DAY)]);
        let day = store.resolve_day(Some("2026-01-01"));
        assert!(day.date.is_none());
        assert!(day.records.is_empty());
    }

    #[test]
    fn unmatched_date_falls_through_to_single_day() {
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, MULTI_DAY), (ATTENDANCE_FILE, SINGLE_DAY)]);
        let day = store.resolve_day(Some("2026-01-01"));
        assert_eq!(day.date.as_deref(), Some("2025-11-15"));
        assert_eq!(day.records.len(), 1);
    }

    #[test]
    fn bare_bucket_list_needs_an_explicit_date() {
        let bare = r#"[
            {"date": "2025-12-01", "attendance_records": [
                {"employee_id": "EMP001", "checkin_time": "09:00", "checkout_time": "18:00"}
            ]}
        ]"#;
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, bare)]);

        let hit = store.resolve_day(Some("2025-12-01"));
        assert_eq!(hit.records.len(), 1);

        // No requested date: the bucket scan is skipped, and the trailing
        // bucket recovery picks the last day instead.
        let recovered = store.resolve_day(None);
        assert_eq!(recovered.date.as_deref(), Some("2025-12-01"));
    }

    #[test]
    fn bare_single_day_list_has_no_date() {
        let bare = r#"[
            {"employee_id": "EMP001", "checkin_time": "09:00", "checkout_time": "18:00"},
            {"employee_id": "EMP002", "checkin_time": "09:10", "checkout_time": "21:00"}
        ]"#;
        let (_dir, store) = store_with(&[(ATTENDANCE_FILE, bare)]);
        let day = store.resolve_day(None);
        assert!(day.date.is_none());
        assert_eq!(day.records.len(), 2);
    }

    #[test]
    fn missing_latest_pointer_recovers_trailing_bucket() {
        let no_pointer = r#"{
            "days": [
                {"date": "2025-12-01", "attendance_records": []},
                {"date": "2025-12-02", "attendance_records": [
                    {"employee_id": "EMP002", "checkin_time": "10:00", "checkout_time": "20:30"}
                ]}
            ]
        }"#;
        let (_dir, store) = store_with(&[(MULTI_DAY_FILE, no_pointer)]);
        let day = store.resolve_day(None);
        assert_eq!(day.date.as_deref(), Some("2025-12-02"));
        assert_eq!(day.records.len(), 1);
    }

    #[test]
    fn single_day_wins_over_trailing_bucket_recovery() {
        let no_pointer = r#"{"days": [{"date": "2025-12-01", "attendance_records": []}]}"#;
        let (_dir, store) =
            store_with(&[(MULTI_DAY_FILE, no_pointer), (ATTENDANCE_FILE, SINGLE_DAY)]);
        let day = store.resolve_day(None);
        assert_eq!(day.date.as_deref(), Some("2025-11-15"));
    }

    #[test]
    fn total_absence_is_an_empty_day() {
        let (_dir, store) = store_with(&[]);
        let day = store.resolve_day(None);
        assert!(day.date.is_none());
        assert!(day.records.is_empty());
    }

    #[test]
    fn malformed_multi_day_degrades_to_single_day() {
        let (_dir, store) =
            store_with(&[(MULTI_DAY_FILE, "{not json"), (ATTENDANCE_FILE, SINGLE_DAY)]);
        let day = store.resolve_day(None);
        assert_eq!(day.date.as_deref(), Some("2025-11-15"));
    }

    #[test]
    fn missing_dataset_error() {
        let (_dir, store) = store_with(&[]);
        let err = store.employees().unwrap_err();
        assert!(matches!(err, StoreError::DatasetNotFound { .. }));
        assert_eq!(err.to_string(), "Data file employees.json not found");
    }
}
