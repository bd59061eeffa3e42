use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::attendance::{DateQuery, employee_lookup};
use crate::store::{DataStore, StoreError};
use crate::timeutil;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LateStayEmployee {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Priya Sharma")]
    pub name: String,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "20:30")]
    pub checkout_time: String,
    pub project_id: String,
    pub office: String,
}

#[derive(Serialize, ToSchema)]
pub struct LateStayResponse {
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    pub late_stay_employees: Vec<LateStayEmployee>,
    #[schema(example = 7)]
    pub total_count: usize,
    #[schema(example = 2)]
    pub female_count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct WomenLateStayResponse {
    #[schema(example = "2025-12-02", nullable = true)]
    pub date: Option<String>,
    pub women_late_stay_employees: Vec<LateStayEmployee>,
    #[schema(example = 2)]
    pub count: usize,
}

fn collect_late_stay(
    store: &DataStore,
    requested: Option<&str>,
) -> Result<(Option<String>, Vec<LateStayEmployee>), StoreError> {
    let employees = store.employees()?;
    let day = store.resolve_day(requested);
    let lookup = employee_lookup(&employees.employees);

    let late = day
        .records
        .iter()
        .filter(|record| timeutil::is_after_8pm(&record.checkout_time))
        .map(|record| {
            let employee = lookup.get(record.employee_id.as_str());
            LateStayEmployee {
                employee_id: record.employee_id.clone(),
                name: employee.map(|e| e.name.clone()).unwrap_or_default(),
                gender: employee.map(|e| e.gender.clone()).unwrap_or_default(),
                checkout_time: record.checkout_time.clone(),
                project_id: employee.map(|e| e.project_id.clone()).unwrap_or_default(),
                office: record.office.clone(),
            }
        })
        .collect();

    Ok((day.date, late))
}

/// Employees who checked out at or after 20:00
#[utoipa::path(
    get,
    path = "/late-stay/after-8pm",
    params(
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Late-stay employees for the day", body = LateStayResponse),
        (status = 404, description = "Backing data file missing")
    ),
    tag = "Late Stay"
)]
pub async fn get_late_stay_after_8pm(
    store: web::Data<DataStore>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let (file_date, late_stay_employees) = collect_late_stay(&store, query.date.as_deref())?;

    let female_count = late_stay_employees
        .iter()
        .filter(|e| e.gender == "Female")
        .count();

    Ok(HttpResponse::Ok().json(LateStayResponse {
        date: query.date.clone().or(file_date),
        total_count: late_stay_employees.len(),
        female_count,
        late_stay_employees,
    }))
}

/// Women who checked out at or after 20:00 (safety compliance)
#[utoipa::path(
    get,
    path = "/late-stay/women-after-8pm",
    params(
        ("date", Query, description = "Date in YYYY-MM-DD format (defaults to latest)")
    ),
    responses(
        (status = 200, description = "Women late-stay employees for the day", body = WomenLateStayResponse),
        (status = 404, description = "Backing data file missing")
    ),
    tag = "Late Stay"
)]
pub async fn get_women_late_stay(
    store: web::Data<DataStore>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let (file_date, late_stay_employees) = collect_late_stay(&store, query.date.as_deref())?;

    let women: Vec<LateStayEmployee> = late_stay_employees
        .into_iter()
        .filter(|e| e.gender == "Female")
        .collect();

    Ok(HttpResponse::Ok().json(WomenLateStayResponse {
        date: query.date.clone().or(file_date),
        count: women.len(),
        women_late_stay_employees: women,
    }))
}
