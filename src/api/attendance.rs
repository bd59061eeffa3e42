use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::model::employee::Employee;
use crate::store::DataStore;
use crate::timeutil;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub employee_id: String,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceSummaryResponse {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Priya Sharma")]
    pub name: String,
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    #[schema(example = "09:15")]
    pub checkin: String,
    #[schema(example = "20:30")]
    pub checkout: String,
    #[schema(example = "11h 15m")]
    pub total_hours: String,
    #[schema(example = true)]
    pub late_arrival: bool,
    pub building: String,
    pub office: String,
}

#[derive(Serialize, ToSchema)]
pub struct EnrichedAttendanceRecord {
    pub employee_id: String,
    pub checkin_time: String,
    pub checkout_time: String,
    pub building: String,
    pub office: String,
    pub name: String,
    pub gender: String,
    pub project_id: String,
    #[schema(example = "9h 25m")]
    pub total_hours: String,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceRecordsResponse {
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    pub attendance_records: Vec<EnrichedAttendanceRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct DailyCountResponse {
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    #[schema(example = 42)]
    pub total_people: usize,
    // Per-office breakdown is not computed yet; kept in the payload so the
    // dashboard contract stays stable.
    pub count_by_office: HashMap<String, u32>,
}

pub fn employee_lookup(employees: &[Employee]) -> HashMap<&str, &Employee> {
    employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e))
        .collect()
}

/// Attendance summary for one employee on the resolved day
#[utoipa::path(
    get,
    path = "/attendance/summary",
    params(
        ("employee_id", Query, description = "Employee ID"),
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Summary for the employee", body = AttendanceSummaryResponse),
        (status = 404, description = "Employee or attendance record not found", body = Object, example = json!({
            "detail": "Employee EMP999 not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance_summary(
    store: web::Data<DataStore>,
    query: web::Query<SummaryQuery>,
) -> actix_web::Result<impl Responder> {
    let employees = store.employees()?;

    let Some(employee) = employees
        .employees
        .iter()
        .find(|e| e.employee_id == query.employee_id)
    else {
        return Ok(HttpResponse::NotFound().json(json!({
            "detail": format!("Employee {} not found", query.employee_id)
        })));
    };

    let day = store.resolve_day(query.date.as_deref());

    // Duplicate rows for one employee are legal; the first one wins.
    let Some(record) = day
        .records
        .iter()
        .find(|r| r.employee_id == query.employee_id)
    else {
        return Ok(HttpResponse::NotFound().json(json!({
            "detail": format!("Attendance record not found for employee {}", query.employee_id)
        })));
    };

    let minutes = timeutil::minutes_between(&record.checkin_time, &record.checkout_time);

    Ok(HttpResponse::Ok().json(AttendanceSummaryResponse {
        employee_id: query.employee_id.clone(),
        name: employee.name.clone(),
        date: query.date.clone().or(day.date.clone()),
        checkin: record.checkin_time.clone(),
        checkout: record.checkout_time.clone(),
        total_hours: timeutil::format_hours_minutes(minutes),
        late_arrival: timeutil::is_late_arrival(&record.checkin_time),
        building: record.building.clone(),
        office: record.office.clone(),
    }))
}

/// All attendance records for the resolved day, joined with the roster
#[utoipa::path(
    get,
    path = "/attendance/records",
    params(
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Enriched attendance records", body = AttendanceRecordsResponse),
        (status = 404, description = "Backing data file missing")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance_records(
    store: web::Data<DataStore>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let employees = store.employees()?;
    let day = store.resolve_day(query.date.as_deref());

    let lookup = employee_lookup(&employees.employees);

    let enriched = day
        .records
        .iter()
        .map(|record| {
            let employee = lookup.get(record.employee_id.as_str());
            let minutes = timeutil::minutes_between(&record.checkin_time, &record.checkout_time);
            EnrichedAttendanceRecord {
                employee_id: record.employee_id.clone(),
                checkin_time: record.checkin_time.clone(),
                checkout_time: record.checkout_time.clone(),
                building: record.building.clone(),
                office: record.office.clone(),
                // Dangling roster references render as empty strings
                name: employee.map(|e| e.name.clone()).unwrap_or_default(),
                gender: employee.map(|e| e.gender.clone()).unwrap_or_default(),
                project_id: employee.map(|e| e.project_id.clone()).unwrap_or_default(),
                total_hours: timeutil::format_hours_minutes(minutes),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(AttendanceRecordsResponse {
        date: query.date.clone().or(day.date),
        attendance_records: enriched,
    }))
}

/// Headcount for the resolved day
#[utoipa::path(
    get,
    path = "/attendance/daily-count",
    params(
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "People count for the day", body = DailyCountResponse)
    ),
    tag = "Attendance"
)]
pub async fn get_daily_count(
    store: web::Data<DataStore>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let day = store.resolve_day(query.date.as_deref());

    Ok(HttpResponse::Ok().json(DailyCountResponse {
        date: query.date.clone().or(day.date),
        total_people: day.records.len(),
        count_by_office: HashMap::new(),
    }))
}
