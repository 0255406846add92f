//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Request to register a new user. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user's public information plus a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Body of a successful register or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
}

/// Request to create a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateJobRequest {
    pub company: String,
    pub position: String,
}

/// Request to update a job. `status` is required by validation, not by parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub company: String,
    pub position: String,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub job_location: Option<String>,
}

/// Query string of `GET /jobs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: String,
    pub job_type: String,
    pub job_location: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `{ "job": ... }`. `job` is `null` when an update matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub job: Option<JobResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub total_jobs: u64,
    pub num_of_pages: u64,
}

/// Counts per status. Statuses with no jobs are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declined: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyApplicationResponse {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub default_stats: DefaultStats,
    pub monthly_applications: Vec<MonthlyApplicationResponse>,
}
