use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[serde(default)]
    #[schema(example = "PRJ001")]
    pub project_id: String,

    #[serde(default)]
    #[schema(example = "Payments Platform")]
    pub project_name: String,

    #[serde(default)]
    pub requires_night_shift: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}
