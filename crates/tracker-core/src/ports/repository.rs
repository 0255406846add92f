use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Job, JobChanges, JobFilter, JobQuery, JobStatus, MonthBucket, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    ///
    /// Fails with [`RepoError::Constraint`] when a unique key is already taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Job repository. Every lookup and mutation is scoped to an owner.
#[async_trait]
pub trait JobRepository: BaseRepository<Job, Uuid> {
    async fn find_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError>;

    /// One page of the owner's jobs matching `query`.
    async fn list(&self, owner_id: Uuid, query: &JobQuery) -> Result<Vec<Job>, RepoError>;

    /// Number of the owner's jobs matching `filter`, ignoring paging.
    async fn count(&self, owner_id: Uuid, filter: &JobFilter) -> Result<u64, RepoError>;

    /// Returns the updated job, or `None` when the owner has no such job.
    async fn update_owned(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
        changes: &JobChanges,
    ) -> Result<Option<Job>, RepoError>;

    /// Returns the deleted job, or `None` when the owner has no such job.
    async fn delete_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError>;

    /// Job counts per status. Statuses without jobs are absent.
    async fn count_by_status(&self, owner_id: Uuid) -> Result<Vec<(JobStatus, u64)>, RepoError>;

    /// Job counts per creation (year, month), in no particular order.
    async fn count_by_month(&self, owner_id: Uuid) -> Result<Vec<MonthBucket>, RepoError>;
}
