use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One raw check-in/check-out row. Times are "HH:MM" 24-hour strings as
/// written by the data generator; all fields are defaulted so a sparse row
/// degrades a report instead of failing it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "checkin_time": "09:05",
        "checkout_time": "18:30",
        "building": "Building A",
        "office": "Bangalore"
    })
)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub employee_id: String,

    #[serde(default)]
    #[schema(example = "09:05")]
    pub checkin_time: String,

    #[serde(default)]
    #[schema(example = "18:30")]
    pub checkout_time: String,

    #[serde(default)]
    pub building: String,

    #[serde(default)]
    pub office: String,
}

/// One calendar day's worth of records inside the multi-day file.
#[derive(Debug, Clone, Deserialize)]
pub struct DayBucket {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
}

/// The single-day attendance file speaks two dialects: the older bare
/// array of records, and the later wrapper object carrying the day's date.
/// Both are normalized by the resolver in `store`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SingleDayFile {
    Keyed {
        #[serde(default)]
        date: Option<String>,
        attendance_records: Vec<AttendanceRecord>,
    },
    Bare(Vec<AttendanceRecord>),
}

/// The multi-day attendance file likewise has two dialects: a wrapper with
/// a `latest_date` pointer maintained by the generator, and a bare bucket
/// list without bookkeeping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MultiDayFile {
    Keyed {
        days: Vec<DayBucket>,
        #[serde(default)]
        latest_date: Option<String>,
    },
    Bare(Vec<DayBucket>),
}

impl MultiDayFile {
    pub fn buckets(&self) -> &[DayBucket] {
        match self {
            MultiDayFile::Keyed { days, .. } => days,
            MultiDayFile::Bare(days) => days,
        }
    }
}
