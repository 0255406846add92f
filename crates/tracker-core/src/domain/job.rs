use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location assigned to a job when none is given.
pub const DEFAULT_JOB_LOCATION: &str = "my city";

/// Jobs per listing page.
pub const PAGE_SIZE: u64 = 10;

/// A string that does not name any variant of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Interview,
    Declined,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Pending, JobStatus::Interview, JobStatus::Declined];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Employment type of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Remote,
        JobType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Remote => "remote",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Job entity - one application tracked by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub job_type: JobType,
    pub job_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new pending, full-time job at the default location.
    pub fn new(owner_id: Uuid, company: String, position: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            company,
            position,
            status: JobStatus::default(),
            job_type: JobType::default(),
            job_location: DEFAULT_JOB_LOCATION.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply validated changes in place.
    pub fn apply(&mut self, changes: &JobChanges) {
        self.company = changes.company.clone();
        self.position = changes.position.clone();
        self.status = changes.status;
        if let Some(job_type) = changes.job_type {
            self.job_type = job_type;
        }
        if let Some(location) = &changes.job_location {
            self.job_location = location.clone();
        }
        self.updated_at = Utc::now();
    }
}

/// Validated fields for an owner-scoped update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobChanges {
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub job_type: Option<JobType>,
    pub job_location: Option<String>,
}

/// Listing filters. `None` means the field is not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring of the position.
    pub search: Option<String>,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let search_ok = self.search.as_ref().is_none_or(|search| {
            job.position
                .to_lowercase()
                .contains(&search.to_lowercase())
        });

        search_ok
            && self.status.is_none_or(|status| status == job.status)
            && self.job_type.is_none_or(|job_type| job_type == job.job_type)
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSort {
    Latest,
    Oldest,
    PositionAsc,
    PositionDesc,
}

impl JobSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSort::Latest => "latest",
            JobSort::Oldest => "oldest",
            JobSort::PositionAsc => "a-z",
            JobSort::PositionDesc => "z-a",
        }
    }

    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            JobSort::Latest => b.created_at.cmp(&a.created_at),
            JobSort::Oldest => a.created_at.cmp(&b.created_at),
            JobSort::PositionAsc => a.position.cmp(&b.position),
            JobSort::PositionDesc => b.position.cmp(&a.position),
        }
    }
}

impl FromStr for JobSort {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            JobSort::Latest,
            JobSort::Oldest,
            JobSort::PositionAsc,
            JobSort::PositionDesc,
        ]
        .into_iter()
        .find(|sort| sort.as_str() == s)
        .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    /// Page numbers below 1 are clamped to the first page.
    pub fn new(number: u64) -> Self {
        Self(number.max(1))
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    /// Rows to skip. Saturates at `i64::MAX`, the largest offset SQL accepts,
    /// so a page far past the end simply comes back empty.
    pub fn offset(&self) -> u64 {
        (self.0 - 1)
            .saturating_mul(PAGE_SIZE)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// A complete listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub filter: JobFilter,
    /// `None` keeps store order.
    pub sort: Option<JobSort>,
    pub page: Page,
}

/// One page of listing results.
#[derive(Debug, Clone)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    /// `total_jobs / PAGE_SIZE`, truncated. A partial last page is not counted.
    pub num_of_pages: u64,
}

impl JobPage {
    pub fn new(jobs: Vec<Job>, total_jobs: u64) -> Self {
        Self {
            jobs,
            total_jobs,
            num_of_pages: total_jobs / PAGE_SIZE,
        }
    }
}
