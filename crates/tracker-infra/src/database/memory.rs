//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tracker_core::domain::{
    Job, JobChanges, JobFilter, JobQuery, JobStatus, MonthBucket, User, group_by_month,
};
use tracker_core::error::RepoError;
use tracker_core::ports::{BaseRepository, JobRepository, UserRepository};

/// Users keyed by id. E-mail uniqueness is enforced on insert.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        // Check and insert under one write lock.
        let mut store = self.store.write().await;
        if store.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email must be unique".to_string()));
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }
}

/// Jobs in insertion order, which is the listing order when no sort is given.
#[derive(Default)]
pub struct InMemoryJobRepository {
    store: RwLock<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn owned(&self, owner_id: Uuid, filter: &JobFilter) -> Vec<Job> {
        let store = self.store.read().await;
        store
            .iter()
            .filter(|j| j.owner_id == owner_id && filter.matches(j))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BaseRepository<Job, Uuid> for InMemoryJobRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|j| j.id == id).cloned())
    }

    async fn insert(&self, job: Job) -> Result<Job, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|j| j.id == job.id) {
            return Err(RepoError::Constraint("jobs.id must be unique".to_string()));
        }
        store.push(job.clone());
        Ok(job)
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .find(|j| j.owner_id == owner_id && j.id == job_id)
            .cloned())
    }

    async fn list(&self, owner_id: Uuid, query: &JobQuery) -> Result<Vec<Job>, RepoError> {
        let mut jobs = self.owned(owner_id, &query.filter).await;
        if let Some(sort) = query.sort {
            // Stable, so ties keep insertion order.
            jobs.sort_by(|a, b| sort.compare(a, b));
        }

        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.page.limit()).unwrap_or(usize::MAX);
        Ok(jobs.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, owner_id: Uuid, filter: &JobFilter) -> Result<u64, RepoError> {
        Ok(self.owned(owner_id, filter).await.len() as u64)
    }

    async fn update_owned(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
        changes: &JobChanges,
    ) -> Result<Option<Job>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store
            .iter_mut()
            .find(|j| j.owner_id == owner_id && j.id == job_id)
            .map(|job| {
                job.apply(changes);
                job.clone()
            }))
    }

    async fn delete_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        let mut store = self.store.write().await;
        let index = store
            .iter()
            .position(|j| j.owner_id == owner_id && j.id == job_id);
        Ok(index.map(|i| store.remove(i)))
    }

    async fn count_by_status(&self, owner_id: Uuid) -> Result<Vec<(JobStatus, u64)>, RepoError> {
        let mut counts: HashMap<JobStatus, u64> = HashMap::new();
        for job in self.owned(owner_id, &JobFilter::default()).await {
            *counts.entry(job.status).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn count_by_month(&self, owner_id: Uuid) -> Result<Vec<MonthBucket>, RepoError> {
        let jobs = self.owned(owner_id, &JobFilter::default()).await;
        Ok(group_by_month(jobs.iter().map(|j| j.created_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::domain::{JobSort, Page};

    fn user(email: &str) -> User {
        User::new(email.to_string(), "Jane".to_string(), "hash".to_string())
    }

    fn job(owner_id: Uuid, position: &str) -> Job {
        Job::new(owner_id, "Acme".to_string(), position.to_string())
    }

    #[tokio::test]
    async fn test_user_email_is_unique() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(user("jane@example.com")).await.unwrap();

        let err = repo.insert(user("jane@example.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        let found = repo.find_by_email("jane@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(repo.find_by_id(first.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_pages_in_insertion_order() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();
        for i in 0..12 {
            repo.insert(job(owner, &format!("Role {i:02}"))).await.unwrap();
        }

        let second = repo
            .list(
                owner,
                &JobQuery {
                    page: Page::new(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let positions: Vec<&str> = second.iter().map(|j| j.position.as_str()).collect();
        assert_eq!(positions, vec!["Role 10", "Role 11"]);
        assert_eq!(repo.count(owner, &JobFilter::default()).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();
        for position in ["b", "c", "a"] {
            repo.insert(job(owner, position)).await.unwrap();
        }

        let jobs = repo
            .list(
                owner,
                &JobQuery {
                    sort: Some(JobSort::PositionAsc),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let positions: Vec<&str> = jobs.iter().map(|j| j.position.as_str()).collect();
        assert_eq!(positions, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_mutations_are_owner_scoped() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let stored = repo.insert(job(owner, "Engineer")).await.unwrap();
        let changes = JobChanges {
            company: "Globex".to_string(),
            position: "Lead".to_string(),
            status: JobStatus::Declined,
            job_type: None,
            job_location: None,
        };

        assert!(repo.find_owned(stranger, stored.id).await.unwrap().is_none());
        assert!(
            repo.update_owned(stranger, stored.id, &changes)
                .await
                .unwrap()
                .is_none()
        );
        assert!(repo.delete_owned(stranger, stored.id).await.unwrap().is_none());

        let updated = repo
            .update_owned(owner, stored.id, &changes)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, JobStatus::Declined);

        let deleted = repo.delete_owned(owner, stored.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, stored.id);
        assert!(repo.find_by_id(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_by_status_skips_empty_statuses() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();
        repo.insert(job(owner, "a")).await.unwrap();
        repo.insert(job(owner, "b")).await.unwrap();
        repo.insert(job(Uuid::new_v4(), "c")).await.unwrap();

        let counts = repo.count_by_status(owner).await.unwrap();

        assert_eq!(counts, vec![(JobStatus::Pending, 2)]);
    }
}
