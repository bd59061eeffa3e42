use crate::api::attendance::{
    AttendanceRecordsResponse, AttendanceSummaryResponse, DailyCountResponse,
    EnrichedAttendanceRecord,
};
use crate::api::late_stay::{LateStayEmployee, LateStayResponse, WomenLateStayResponse};
use crate::api::reports::{
    WellbeingRecommendation, WellbeingResponse, WfoComplianceResponse, WorkBalanceResponse,
};
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::project::Project;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance & Late-Stay Copilot API",
        version = "1.0.0",
        description = r#"
## Attendance & Late-Stay Monitoring

Read-only reporting API over flat JSON attendance datasets.

### 🔹 Key Features
- **Attendance**
  - Per-employee daily summary, enriched day records, headcount
- **Late Stay**
  - After-8pm checkout tracking and women-safety compliance view
- **Reports**
  - Per-project work-balance recommendations
  - WFO/WFH compliance split
  - Wellbeing recommendations from daily work patterns

### 📦 Data
All figures are recomputed per request from the JSON files in the data
directory; the multi-day bundle is preferred and the legacy single-day
file is kept readable.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::get_attendance_summary,
        crate::api::attendance::get_attendance_records,
        crate::api::attendance::get_daily_count,

        crate::api::late_stay::get_late_stay_after_8pm,
        crate::api::late_stay::get_women_late_stay,

        crate::api::reports::get_work_balance_by_project,
        crate::api::reports::get_wfo_compliance,
        crate::api::reports::get_wellbeing_recommendations,
        crate::api::reports::health
    ),
    components(
        schemas(
            Employee,
            Project,
            AttendanceRecord,
            AttendanceSummaryResponse,
            EnrichedAttendanceRecord,
            AttendanceRecordsResponse,
            DailyCountResponse,
            LateStayEmployee,
            LateStayResponse,
            WomenLateStayResponse,
            WorkBalanceResponse,
            WfoComplianceResponse,
            WellbeingRecommendation,
            WellbeingResponse
        )
    ),
    tags(
        (name = "Attendance", description = "Daily attendance reporting APIs"),
        (name = "Late Stay", description = "After-8pm checkout monitoring APIs"),
        (name = "Reports", description = "Derived compliance and wellbeing reports"),
    )
)]
pub struct ApiDoc;
