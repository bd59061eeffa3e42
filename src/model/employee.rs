use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// One roster entry from employees.json. Every field is defaulted because
/// the roster is hand-maintained JSON and partial entries do occur.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "name": "Priya Sharma",
        "gender": "Female",
        "project_id": "PRJ001",
        "Mode_of_work": "WFO",
        "office_location": "Building A - Floor 3"
    })
)]
pub struct Employee {
    #[serde(default)]
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[serde(default)]
    #[schema(example = "Priya Sharma")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Female")]
    pub gender: String,

    #[serde(default)]
    #[schema(example = "PRJ001")]
    pub project_id: String,

    // Legacy field casing from the roster file
    #[serde(rename = "Mode_of_work", default)]
    #[schema(example = "WFO")]
    pub mode_of_work: String,

    #[serde(default)]
    #[schema(example = "Building A - Floor 3")]
    pub office_location: String,
}

impl Employee {
    pub fn work_mode(&self) -> WorkMode {
        self.mode_of_work.trim().parse().unwrap_or(WorkMode::Wfo)
    }
}

/// Assigned work mode. Anything the roster carries that is not recognizably
/// WFH counts as WFO.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum WorkMode {
    Wfo,
    Wfh,
}

#[derive(Debug, Deserialize)]
pub struct EmployeesFile {
    #[serde(default)]
    pub employees: Vec<Employee>,
}
