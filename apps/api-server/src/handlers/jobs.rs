//! Job handlers. Every route requires an [`Identity`] and only ever sees the
//! caller's own jobs.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tracker_core::domain::{Job, JobStats};
use tracker_core::validation::{JobListInput, JobUpdateInput, NewJobInput};
use tracker_shared::dto::{
    CreateJobRequest, DefaultStats, JobEnvelope, JobListQuery, JobListResponse, JobResponse,
    MonthlyApplicationResponse, StatsResponse, UpdateJobRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn job_response(job: Job) -> JobResponse {
    JobResponse {
        id: job.id.to_string(),
        company: job.company,
        position: job.position,
        status: job.status.to_string(),
        job_type: job.job_type.to_string(),
        job_location: job.job_location,
        created_by: job.owner_id.to_string(),
        created_at: job.created_at.to_rfc3339(),
        updated_at: job.updated_at.to_rfc3339(),
    }
}

fn stats_response(stats: JobStats) -> StatsResponse {
    StatsResponse {
        default_stats: DefaultStats {
            pending: stats.default_stats.pending,
            interview: stats.default_stats.interview,
            declined: stats.default_stats.declined,
        },
        monthly_applications: stats
            .monthly_applications
            .into_iter()
            .map(|m| MonthlyApplicationResponse {
                date: m.date,
                count: m.count,
            })
            .collect(),
    }
}

/// An id that cannot name any job is treated like someone else's job.
fn job_id(raw: &str, action: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("You are not allowed to {action} this job")))
}

/// POST /api/v1/jobs
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateJobRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let job = state
        .jobs
        .create(
            identity.user_id,
            NewJobInput {
                company: req.company,
                position: req.position,
            },
        )
        .await?;

    tracing::debug!(job_id = %job.id, owner_id = %identity.user_id, "Job created");

    Ok(HttpResponse::Created().json(JobEnvelope {
        job: Some(job_response(job)),
    }))
}

/// GET /api/v1/jobs
pub async fn index(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<JobListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let page = state
        .jobs
        .list(
            identity.user_id,
            &JobListInput {
                search: query.search,
                status: query.status,
                job_type: query.job_type,
                sort: query.sort,
                page: query.page,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(JobListResponse {
        jobs: page.jobs.into_iter().map(job_response).collect(),
        total_jobs: page.total_jobs,
        num_of_pages: page.num_of_pages,
    }))
}

/// GET /api/v1/jobs/stats
pub async fn stats(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let stats = state.jobs.stats(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(stats_response(stats)))
}

/// GET /api/v1/jobs/{id}
pub async fn show(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = job_id(&path, "view")?;

    let job = state.jobs.show(identity.user_id, id).await?;

    Ok(HttpResponse::Ok().json(JobEnvelope {
        job: Some(job_response(job)),
    }))
}

/// PATCH /api/v1/jobs/{id}
///
/// Responds `{"job": null}` when the caller owns no such job.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateJobRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = JobUpdateInput {
        company: req.company,
        position: req.position,
        status: req.status,
        job_type: req.job_type,
        job_location: req.job_location,
    };

    let job = match Uuid::parse_str(&path) {
        Ok(id) => state.jobs.update(identity.user_id, id, &input).await?,
        // Still validate, so a bad body is reported even for a bad id.
        Err(_) => {
            tracker_core::validation::validate_job_update(&input)?;
            None
        }
    };

    Ok(HttpResponse::Ok().json(JobEnvelope {
        job: job.map(job_response),
    }))
}

/// DELETE /api/v1/jobs/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = job_id(&path, "delete")?;

    let job = state.jobs.destroy(identity.user_id, id).await?;

    tracing::debug!(job_id = %job.id, owner_id = %identity.user_id, "Job deleted");

    Ok(HttpResponse::Ok().json(JobEnvelope {
        job: Some(job_response(job)),
    }))
}
