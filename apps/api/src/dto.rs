use chrono::{DateTime, SecondsFormat, Utc};
use coachhub_domain::{Coaching, Project};
use serde::Serialize;
use ts_rs::TS;

/// Greeting payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/hello-response.ts"
)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// API representation of a coaching.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/coaching-response.ts"
)]
pub struct CoachingResponse {
    pub id: String,
    pub client_id: String,
    pub coach_id: String,
    pub project_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Coaching> for CoachingResponse {
    fn from(coaching: Coaching) -> Self {
        Self {
            id: coaching.id().to_string(),
            client_id: coaching.client_id().to_string(),
            coach_id: coaching.coach_id().to_string(),
            project_id: coaching.project_id().to_string(),
            created_at: timestamp(coaching.created_at()),
            updated_at: timestamp(coaching.updated_at()),
        }
    }
}

/// API representation of a project.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/project-response.ts"
)]
pub struct ProjectResponse {
    pub id: String,
    pub manager_ids: Vec<String>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id().to_string(),
            manager_ids: project
                .manager_ids()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
