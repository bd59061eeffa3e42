use std::collections::HashSet;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::attendance::DateQuery;
use crate::model::employee::WorkMode;
use crate::store::DataStore;
use crate::timeutil;

#[derive(Serialize, ToSchema)]
pub struct WorkBalanceResponse {
    #[schema(example = "PRJ001")]
    pub project_id: String,
    #[schema(example = "Payments Platform")]
    pub project_name: String,
    #[schema(example = "9h 45m")]
    pub average_work_hours: String,
    #[schema(example = 12)]
    pub total_employees: usize,
    #[schema(example = "Medium")]
    pub late_night_frequency: String,
    #[schema(example = 2)]
    pub late_night_count: usize,
    pub requires_night_shift: bool,
    #[schema(example = "Work hours are balanced")]
    pub recommendation: String,
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct WfoComplianceResponse {
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    pub total_employees: usize,
    pub present_employees: usize,
    pub absent_employees: usize,
    #[schema(example = 87.5)]
    pub compliance_percentage: f64,
    // WFO-specific metrics
    pub wfo_total: usize,
    pub wfo_present: usize,
    pub wfo_absent: usize,
    #[schema(example = 71.43)]
    pub wfo_compliance_percentage: f64,
    // WFH-specific metrics
    pub wfh_total: usize,
    pub wfh_present: usize,
    pub wfh_absent: usize,
    #[schema(example = 28.57)]
    pub wfh_compliance_percentage: f64,
    pub total_present: usize,
    #[schema(example = "Compliant")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct WellbeingQuery {
    pub employee_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct WellbeingRecommendation {
    #[serde(rename = "type")]
    #[schema(example = "work_hours")]
    pub kind: String,
    pub message: String,
    #[schema(example = "high")]
    pub priority: String,
}

#[derive(Serialize, ToSchema)]
pub struct WellbeingResponse {
    #[schema(nullable = true)]
    pub employee_id: Option<String>,
    pub recommendations: Vec<WellbeingRecommendation>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": "healthy",
            "service": "attendance-latestay-copilot"
        }))
    ),
    tag = "Reports"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "attendance-latestay-copilot"
    }))
}

/// Work-balance report for one project
#[utoipa::path(
    get,
    path = "/reports/work-balance/project/{project_id}",
    params(
        ("project_id", Path, description = "Project ID"),
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Work-balance statistics and recommendation", body = WorkBalanceResponse),
        (status = 404, description = "Project not found", body = Object, example = json!({
            "detail": "Project PRJ999 not found"
        }))
    ),
    tag = "Reports"
)]
pub async fn get_work_balance_by_project(
    store: web::Data<DataStore>,
    path: web::Path<String>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let project_id = path.into_inner();

    let employees = store.employees()?;
    let projects = store.projects()?;

    let Some(project) = projects
        .projects
        .iter()
        .find(|p| p.project_id == project_id)
    else {
        return Ok(HttpResponse::NotFound().json(json!({
            "detail": format!("Project {} not found", project_id)
        })));
    };

    let project_employees: Vec<_> = employees
        .employees
        .iter()
        .filter(|e| e.project_id == project_id)
        .collect();
    let member_ids: HashSet<&str> = project_employees
        .iter()
        .map(|e| e.employee_id.as_str())
        .collect();

    let day = store.resolve_day(query.date.as_deref());
    let project_attendance: Vec<_> = day
        .records
        .iter()
        .filter(|r| member_ids.contains(r.employee_id.as_str()))
        .collect();

    let mut total_hours = 0.0;
    let mut late_night_count = 0usize;
    for record in &project_attendance {
        total_hours += timeutil::hours_f64(timeutil::minutes_between(
            &record.checkin_time,
            &record.checkout_time,
        ));
        if timeutil::is_after_8pm(&record.checkout_time) {
            late_night_count += 1;
        }
    }

    let present = project_attendance.len();
    let avg_hours = if present > 0 {
        total_hours / present as f64
    } else {
        0.0
    };

    // Frequency buckets are relative to the project's present headcount
    let late_night_frequency = if late_night_count as f64 > present as f64 * 0.3 {
        "High"
    } else if late_night_count > 0 {
        "Medium"
    } else {
        "Low"
    };

    // Rules are ordered: sustained long days with any late nights outrank
    // the pure late-night-share rule.
    let recommendation = if avg_hours > 10.0 && late_night_count > 0 {
        "Introduce shift rotation and mandatory rest days"
    } else if late_night_count as f64 > present as f64 * 0.5 {
        "High late-night work detected. Consider workload redistribution"
    } else {
        "Work hours are balanced"
    };

    debug!(
        project_id,
        present, late_night_count, avg_hours, "work-balance computed"
    );

    Ok(HttpResponse::Ok().json(WorkBalanceResponse {
        project_id,
        project_name: project.project_name.clone(),
        average_work_hours: timeutil::average_hours_label(avg_hours),
        total_employees: project_employees.len(),
        late_night_frequency: late_night_frequency.to_string(),
        late_night_count,
        requires_night_shift: project.requires_night_shift,
        recommendation: recommendation.to_string(),
        date: query.date.clone().or(day.date),
    }))
}

/// Work-from-office compliance split for the resolved day
#[utoipa::path(
    get,
    path = "/reports/wfo-compliance",
    params(
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "WFO/WFH compliance figures", body = WfoComplianceResponse),
        (status = 404, description = "Employee roster file missing")
    ),
    tag = "Reports"
)]
pub async fn get_wfo_compliance(
    store: web::Data<DataStore>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let employees = store.employees()?;
    let day = store.resolve_day(query.date.as_deref());

    // Partition the roster by assigned mode; entries without an id cannot
    // be matched to attendance and are left out of both partitions.
    let mut wfo_ids: Vec<&str> = Vec::new();
    let mut wfh_ids: Vec<&str> = Vec::new();
    for employee in &employees.employees {
        if employee.employee_id.is_empty() {
            continue;
        }
        match employee.work_mode() {
            WorkMode::Wfh => wfh_ids.push(&employee.employee_id),
            WorkMode::Wfo => wfo_ids.push(&employee.employee_id),
        }
    }

    // Duplicate records collapse into one presence
    let present_ids: HashSet<&str> = day
        .records
        .iter()
        .map(|r| r.employee_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();

    let wfo_present = wfo_ids.iter().filter(|id| present_ids.contains(**id)).count();
    let wfh_present = wfh_ids.iter().filter(|id| present_ids.contains(**id)).count();

    // Mode percentages are shares of everyone present, so the two figures
    // sum to 100 whenever anyone showed up at all.
    let total_present = present_ids.len();
    let (wfo_pct, wfh_pct) = if total_present > 0 {
        (
            wfo_present as f64 / total_present as f64 * 100.0,
            wfh_present as f64 / total_present as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let total_employees = employees.employees.len();
    let overall = if total_employees > 0 {
        total_present as f64 / total_employees as f64 * 100.0
    } else {
        0.0
    };

    let status = if overall >= 80.0 {
        "Compliant"
    } else {
        "Non-Compliant"
    };

    Ok(HttpResponse::Ok().json(WfoComplianceResponse {
        date: query.date.clone().or(day.date),
        total_employees,
        present_employees: total_present,
        // Records with ids outside the roster can push presence past the
        // roster size; absence never goes negative.
        absent_employees: total_employees.saturating_sub(total_present),
        compliance_percentage: round2(overall),
        wfo_total: wfo_ids.len(),
        wfo_present,
        wfo_absent: wfo_ids.len() - wfo_present,
        wfo_compliance_percentage: round2(wfo_pct),
        wfh_total: wfh_ids.len(),
        wfh_present,
        wfh_absent: wfh_ids.len() - wfh_present,
        wfh_compliance_percentage: round2(wfh_pct),
        total_present,
        status: status.to_string(),
    }))
}

/// Wellbeing recommendations from the day's work pattern
#[utoipa::path(
    get,
    path = "/reports/wellbeing-recommendations",
    params(
        ("employee_id", Query, description = "Employee ID (optional)"),
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Triggered wellbeing rules", body = WellbeingResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee EMP999 not found"
        }))
    ),
    tag = "Reports"
)]
pub async fn get_wellbeing_recommendations(
    store: web::Data<DataStore>,
    query: web::Query<WellbeingQuery>,
) -> actix_web::Result<impl Responder> {
    let employees = store.employees()?;

    let mut recommendations = Vec::new();

    if let Some(employee_id) = &query.employee_id {
        if !employees
            .employees
            .iter()
            .any(|e| &e.employee_id == employee_id)
        {
            return Ok(HttpResponse::NotFound().json(json!({
                "detail": format!("Employee {} not found", employee_id)
            })));
        }

        let day = store.resolve_day(query.date.as_deref());
        if let Some(record) = day
            .records
            .iter()
            .find(|r| &r.employee_id == employee_id)
        {
            let hours = timeutil::hours_f64(timeutil::minutes_between(
                &record.checkin_time,
                &record.checkout_time,
            ));

            if hours > 10.0 {
                recommendations.push(WellbeingRecommendation {
                    kind: "work_hours".to_string(),
                    message: "You've worked more than 10 hours today. Consider taking breaks and maintaining work-life balance.".to_string(),
                    priority: "high".to_string(),
                });
            }

            if timeutil::is_after_8pm(&record.checkout_time) {
                recommendations.push(WellbeingRecommendation {
                    kind: "late_stay".to_string(),
                    message: "You stayed late today. Ensure you have safe transportation arranged.".to_string(),
                    priority: "medium".to_string(),
                });
            }
        }
    } else {
        recommendations.push(WellbeingRecommendation {
            kind: "general".to_string(),
            message: "Maintain regular work hours and take adequate breaks for optimal productivity.".to_string(),
            priority: "low".to_string(),
        });
    }

    Ok(HttpResponse::Ok().json(WellbeingResponse {
        employee_id: query.employee_id.clone(),
        recommendations,
    }))
}
