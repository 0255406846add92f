//! Owner-scoped job operations and statistics.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Job, JobPage, JobStats, StatusCounts, monthly_applications};
use crate::error::DomainError;
use crate::ports::{BaseRepository, JobRepository};
use crate::validation::{
    JobListInput, JobUpdateInput, NewJobInput, parse_job_query, validate_job_update,
    validate_new_job,
};

#[derive(Clone)]
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }

    pub async fn create(&self, owner_id: Uuid, input: NewJobInput) -> Result<Job, DomainError> {
        validate_new_job(&input)?;
        let job = Job::new(owner_id, input.company, input.position);
        Ok(self.jobs.insert(job).await?)
    }

    pub async fn list(&self, owner_id: Uuid, input: &JobListInput) -> Result<JobPage, DomainError> {
        let query = parse_job_query(input)?;
        let jobs = self.jobs.list(owner_id, &query).await?;
        let total_jobs = self.jobs.count(owner_id, &query.filter).await?;
        Ok(JobPage::new(jobs, total_jobs))
    }

    pub async fn stats(&self, owner_id: Uuid) -> Result<JobStats, DomainError> {
        let by_status = self.jobs.count_by_status(owner_id).await?;
        let by_month = self.jobs.count_by_month(owner_id).await?;
        Ok(JobStats {
            default_stats: StatusCounts::from_counts(by_status),
            monthly_applications: monthly_applications(by_month),
        })
    }

    pub async fn show(&self, owner_id: Uuid, job_id: Uuid) -> Result<Job, DomainError> {
        self.jobs
            .find_owned(owner_id, job_id)
            .await?
            .ok_or_else(|| DomainError::NotAuthorized("You are not allowed to view this job".into()))
    }

    /// `Ok(None)` when the owner has no job with this id.
    pub async fn update(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
        input: &JobUpdateInput,
    ) -> Result<Option<Job>, DomainError> {
        let changes = validate_job_update(input)?;
        Ok(self.jobs.update_owned(owner_id, job_id, &changes).await?)
    }

    pub async fn destroy(&self, owner_id: Uuid, job_id: Uuid) -> Result<Job, DomainError> {
        self.jobs
            .delete_owned(owner_id, job_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotAuthorized("You are not allowed to delete this job".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobStatus, JobType};
    use crate::services::fakes::FakeJobs;
    use chrono::{TimeZone, Utc};

    fn new_job(company: &str, position: &str) -> NewJobInput {
        NewJobInput {
            company: company.to_string(),
            position: position.to_string(),
        }
    }

    fn update(status: &str) -> JobUpdateInput {
        JobUpdateInput {
            company: "Globex".to_string(),
            position: "Lead".to_string(),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_validates_and_persists() {
        let repo = Arc::new(FakeJobs::default());
        let jobs = JobService::new(repo.clone());
        let owner = Uuid::new_v4();

        let job = jobs.create(owner, new_job("Acme", "Engineer")).await.unwrap();
        assert_eq!(job.owner_id, owner);
        assert_eq!(job.status, JobStatus::Pending);

        let err = jobs.create(owner, new_job("", "")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(e) if e.len() == 2));
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn test_pagination_truncates_page_count() {
        let jobs = JobService::new(Arc::new(FakeJobs::default()));
        let owner = Uuid::new_v4();
        for i in 0..25 {
            jobs.create(owner, new_job("Acme", &format!("Role {i}")))
                .await
                .unwrap();
        }

        let mut sizes = Vec::new();
        for page in 1..=3 {
            let result = jobs
                .list(
                    owner,
                    &JobListInput {
                        page: Some(page),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            assert_eq!(result.total_jobs, 25);
            assert_eq!(result.num_of_pages, 2);
            sizes.push(result.jobs.len());
        }
        assert_eq!(sizes, vec![10, 10, 5]);
    }

    #[tokio::test]
    async fn test_page_far_past_the_end_is_empty() {
        let jobs = JobService::new(Arc::new(FakeJobs::default()));
        let owner = Uuid::new_v4();
        for i in 0..12 {
            jobs.create(owner, new_job("Acme", &format!("Role {i}")))
                .await
                .unwrap();
        }

        let result = jobs
            .list(
                owner,
                &JobListInput {
                    page: Some(u64::MAX),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.jobs.is_empty());
        assert_eq!(result.total_jobs, 12);
        assert_eq!(result.num_of_pages, 1);
    }

    #[tokio::test]
    async fn test_list_is_owner_scoped_and_filtered() {
        let jobs = JobService::new(Arc::new(FakeJobs::default()));
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        jobs.create(owner, new_job("Acme", "Backend Engineer")).await.unwrap();
        jobs.create(owner, new_job("Acme", "Designer")).await.unwrap();
        jobs.create(other, new_job("Acme", "Frontend Engineer")).await.unwrap();

        let result = jobs
            .list(
                owner,
                &JobListInput {
                    search: Some("engineer".to_string()),
                    status: Some("all".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.total_jobs, 1);
        assert_eq!(result.jobs[0].position, "Backend Engineer");
    }

    #[tokio::test]
    async fn test_list_sorts_by_position() {
        let jobs = JobService::new(Arc::new(FakeJobs::default()));
        let owner = Uuid::new_v4();
        for position in ["Bravo", "Alpha", "Charlie"] {
            jobs.create(owner, new_job("Acme", position)).await.unwrap();
        }

        let result = jobs
            .list(
                owner,
                &JobListInput {
                    sort: Some("z-a".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let positions: Vec<&str> = result.jobs.iter().map(|j| j.position.as_str()).collect();
        assert_eq!(positions, vec!["Charlie", "Bravo", "Alpha"]);
    }

    #[tokio::test]
    async fn test_other_owner_cannot_touch_job() {
        let repo = Arc::new(FakeJobs::default());
        let jobs = JobService::new(repo.clone());
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let job = jobs.create(owner, new_job("Acme", "Engineer")).await.unwrap();

        assert!(matches!(
            jobs.show(intruder, job.id).await,
            Err(DomainError::NotAuthorized(_))
        ));
        assert!(matches!(
            jobs.destroy(intruder, job.id).await,
            Err(DomainError::NotAuthorized(_))
        ));
        assert!(
            jobs.update(intruder, job.id, &update("declined"))
                .await
                .unwrap()
                .is_none()
        );

        let stored = repo.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], job);
    }

    #[tokio::test]
    async fn test_update_and_destroy_own_job() {
        let repo = Arc::new(FakeJobs::default());
        let jobs = JobService::new(repo.clone());
        let owner = Uuid::new_v4();
        let job = jobs.create(owner, new_job("Acme", "Engineer")).await.unwrap();

        let mut changes = update("interview");
        changes.job_type = Some("remote".to_string());
        let updated = jobs.update(owner, job.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.company, "Globex");
        assert_eq!(updated.status, JobStatus::Interview);
        assert_eq!(updated.job_type, JobType::Remote);

        let bad = jobs.update(owner, job.id, &update("hired")).await.unwrap_err();
        assert!(matches!(bad, DomainError::Validation(_)));

        let deleted = jobs.destroy(owner, job.id).await.unwrap();
        assert_eq!(deleted.id, job.id);
        assert!(repo.all().is_empty());
        assert!(matches!(
            jobs.show(owner, job.id).await,
            Err(DomainError::NotAuthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_omits_absent_status_and_orders_months() {
        let repo = Arc::new(FakeJobs::default());
        let jobs = JobService::new(repo.clone());
        let owner = Uuid::new_v4();

        for (month, status) in [
            (3, JobStatus::Pending),
            (1, JobStatus::Interview),
            (2, JobStatus::Pending),
        ] {
            let mut job = Job::new(owner, "Acme".to_string(), "Engineer".to_string());
            job.status = status;
            job.created_at = Utc.with_ymd_and_hms(2026, month, 10, 12, 0, 0).unwrap();
            repo.insert(job).await.unwrap();
        }

        let stats = jobs.stats(owner).await.unwrap();

        assert_eq!(stats.default_stats.pending, Some(2));
        assert_eq!(stats.default_stats.interview, Some(1));
        assert_eq!(stats.default_stats.declined, None);

        let labels: Vec<&str> = stats
            .monthly_applications
            .iter()
            .map(|m| m.date.as_str())
            .collect();
        assert_eq!(labels, vec!["Jan 2026", "Feb 2026", "Mar 2026"]);
    }
}
