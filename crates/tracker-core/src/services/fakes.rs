//! Test doubles for the service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Job, JobChanges, JobFilter, JobQuery, JobStatus, MonthBucket, User, group_by_month,
};
use crate::error::RepoError;
use crate::ports::{
    AuthError, BaseRepository, JobRepository, PasswordService, TokenClaims, TokenService,
    UserRepository,
};

#[derive(Default)]
pub struct FakeUsers {
    users: Mutex<Vec<User>>,
    hidden: AtomicBool,
}

impl FakeUsers {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Make `find_by_email` miss, as if another request inserted concurrently.
    pub fn hide_from_lookup(&self) {
        self.hidden.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for FakeUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.all().into_iter().find(|u| u.id == id))
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        if self.hidden.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.all().into_iter().find(|u| u.email == email))
    }
}

#[derive(Default)]
pub struct FakeJobs {
    jobs: Mutex<Vec<Job>>,
}

impl FakeJobs {
    pub fn all(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }

    fn owned(&self, owner_id: Uuid, filter: &JobFilter) -> Vec<Job> {
        self.all()
            .into_iter()
            .filter(|j| j.owner_id == owner_id && filter.matches(j))
            .collect()
    }
}

#[async_trait]
impl BaseRepository<Job, Uuid> for FakeJobs {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, RepoError> {
        Ok(self.all().into_iter().find(|j| j.id == id))
    }

    async fn insert(&self, job: Job) -> Result<Job, RepoError> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }
}

#[async_trait]
impl JobRepository for FakeJobs {
    async fn find_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        Ok(self
            .all()
            .into_iter()
            .find(|j| j.owner_id == owner_id && j.id == job_id))
    }

    async fn list(&self, owner_id: Uuid, query: &JobQuery) -> Result<Vec<Job>, RepoError> {
        let mut jobs = self.owned(owner_id, &query.filter);
        if let Some(sort) = query.sort {
            jobs.sort_by(|a, b| sort.compare(a, b));
        }
        Ok(jobs
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .collect())
    }

    async fn count(&self, owner_id: Uuid, filter: &JobFilter) -> Result<u64, RepoError> {
        Ok(self.owned(owner_id, filter).len() as u64)
    }

    async fn update_owned(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
        changes: &JobChanges,
    ) -> Result<Option<Job>, RepoError> {
        let mut jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter_mut()
            .find(|j| j.owner_id == owner_id && j.id == job_id)
            .map(|job| {
                job.apply(changes);
                job.clone()
            }))
    }

    async fn delete_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        let mut jobs = self.jobs.lock().unwrap();
        let position = jobs
            .iter()
            .position(|j| j.owner_id == owner_id && j.id == job_id);
        Ok(position.map(|i| jobs.remove(i)))
    }

    async fn count_by_status(&self, owner_id: Uuid) -> Result<Vec<(JobStatus, u64)>, RepoError> {
        let jobs = self.owned(owner_id, &JobFilter::default());
        Ok(JobStatus::ALL
            .into_iter()
            .map(|status| {
                let count = jobs.iter().filter(|j| j.status == status).count() as u64;
                (status, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect())
    }

    async fn count_by_month(&self, owner_id: Uuid) -> Result<Vec<MonthBucket>, RepoError> {
        let jobs = self.owned(owner_id, &JobFilter::default());
        Ok(group_by_month(jobs.iter().map(|j| j.created_at)))
    }
}

/// Reversible "hash" with a per-call salt; anything without the prefix is malformed.
pub struct PlainPasswords;

static SALT: AtomicU64 = AtomicU64::new(0);

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SALT.fetch_add(1, Ordering::SeqCst);
        Ok(format!("plain${salt}${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let rest = hash
            .strip_prefix("plain$")
            .ok_or_else(|| AuthError::HashingError("unrecognised hash".to_string()))?;
        let (_, stored) = rest
            .split_once('$')
            .ok_or_else(|| AuthError::HashingError("missing salt".to_string()))?;
        Ok(stored == password)
    }
}

pub struct StaticTokens;

impl TokenService for StaticTokens {
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        Ok(format!("token-{user_id}"))
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let id = token
            .strip_prefix("token-")
            .ok_or_else(|| AuthError::InvalidToken(token.to_string()))?;
        let user_id = Uuid::parse_str(id).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(TokenClaims { user_id })
    }
}
