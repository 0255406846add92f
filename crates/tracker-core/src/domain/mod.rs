//! Domain entities - the core business objects.

mod job;
mod stats;
mod user;

pub use job::{
    DEFAULT_JOB_LOCATION, Job, JobChanges, JobFilter, JobPage, JobQuery, JobSort, JobStatus,
    JobType, PAGE_SIZE, Page, UnknownVariant,
};
pub use stats::{
    JobStats, MONTHLY_WINDOW, MonthBucket, MonthlyApplications, StatusCounts, group_by_month,
    monthly_applications,
};
pub use user::User;
