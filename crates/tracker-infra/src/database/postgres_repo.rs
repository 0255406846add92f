//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use tracker_core::domain::{
    Job, JobChanges, JobFilter, JobQuery, JobSort, JobStatus, MonthBucket, User,
};
use tracker_core::error::RepoError;
use tracker_core::ports::{JobRepository, UserRepository};

use super::entity::job::{self, Entity as JobEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL job repository.
pub type PostgresJobRepository = PostgresBaseRepository<JobEntity>;

/// Mask the local part of an e-mail so logs carry no PII.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Escape `LIKE` wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn owned_condition(owner_id: Uuid, filter: &JobFilter) -> Condition {
    let mut condition = Condition::all().add(job::Column::OwnerId.eq(owner_id));

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        let position = Func::lower(Expr::col(job::Column::Position));
        condition = condition.add(Expr::expr(position).like(pattern));
    }
    if let Some(status) = filter.status {
        condition = condition.add(job::Column::Status.eq(job::Status::from(status)));
    }
    if let Some(job_type) = filter.job_type {
        condition = condition.add(job::Column::JobType.eq(job::Kind::from(job_type)));
    }

    condition
}

/// Ties are broken by id so equal keys keep a stable order across pages.
fn sorted(select: Select<JobEntity>, sort: Option<JobSort>) -> Select<JobEntity> {
    let select = match sort {
        Some(JobSort::Latest) => select.order_by_desc(job::Column::CreatedAt),
        Some(JobSort::Oldest) => select.order_by_asc(job::Column::CreatedAt),
        Some(JobSort::PositionAsc) => select.order_by_asc(job::Column::Position),
        Some(JobSort::PositionDesc) => select.order_by_desc(job::Column::Position),
        None => return select,
    };
    select.order_by_asc(job::Column::Id)
}

#[derive(Debug, FromQueryResult)]
struct StatusCountRow {
    status: job::Status,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct MonthCountRow {
    year: i32,
    month: i32,
    count: i64,
}

impl PostgresJobRepository {
    async fn find_owned_model(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<job::Model>, RepoError> {
        JobEntity::find()
            .filter(job::Column::OwnerId.eq(owner_id))
            .filter(job::Column::Id.eq(job_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn find_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        Ok(self.find_owned_model(owner_id, job_id).await?.map(Into::into))
    }

    async fn list(&self, owner_id: Uuid, query: &JobQuery) -> Result<Vec<Job>, RepoError> {
        let select = JobEntity::find().filter(owned_condition(owner_id, &query.filter));

        let result = sorted(select, query.sort)
            .offset(query.page.offset())
            .limit(query.page.limit())
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self, owner_id: Uuid, filter: &JobFilter) -> Result<u64, RepoError> {
        JobEntity::find()
            .filter(owned_condition(owner_id, filter))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update_owned(
        &self,
        owner_id: Uuid,
        job_id: Uuid,
        changes: &JobChanges,
    ) -> Result<Option<Job>, RepoError> {
        let Some(model) = self.find_owned_model(owner_id, job_id).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.company = Set(changes.company.clone());
        active.position = Set(changes.position.clone());
        active.status = Set(changes.status.into());
        if let Some(job_type) = changes.job_type {
            active.job_type = Set(job_type.into());
        }
        if let Some(location) = &changes.job_location {
            active.job_location = Set(location.clone());
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.into()))
    }

    async fn delete_owned(&self, owner_id: Uuid, job_id: Uuid) -> Result<Option<Job>, RepoError> {
        let Some(model) = self.find_owned_model(owner_id, job_id).await? else {
            return Ok(None);
        };

        let result = JobEntity::delete_many()
            .filter(job::Column::OwnerId.eq(owner_id))
            .filter(job::Column::Id.eq(job_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(model.into()))
    }

    async fn count_by_status(&self, owner_id: Uuid) -> Result<Vec<(JobStatus, u64)>, RepoError> {
        let rows = JobEntity::find()
            .select_only()
            .column(job::Column::Status)
            .column_as(Expr::col(job::Column::Id).count(), "count")
            .filter(job::Column::OwnerId.eq(owner_id))
            .group_by(job::Column::Status)
            .into_model::<StatusCountRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.status.into(), row.count.max(0) as u64))
            .collect())
    }

    async fn count_by_month(&self, owner_id: Uuid) -> Result<Vec<MonthBucket>, RepoError> {
        const YEAR: &str = "CAST(EXTRACT(YEAR FROM created_at) AS INTEGER)";
        const MONTH: &str = "CAST(EXTRACT(MONTH FROM created_at) AS INTEGER)";

        let rows = JobEntity::find()
            .select_only()
            .column_as(Expr::cust(YEAR), "year")
            .column_as(Expr::cust(MONTH), "month")
            .column_as(Expr::col(job::Column::Id).count(), "count")
            .filter(job::Column::OwnerId.eq(owner_id))
            .group_by(Expr::cust(YEAR))
            .group_by(Expr::cust(MONTH))
            .into_model::<MonthCountRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| MonthBucket {
                year: row.year,
                month: row.month.max(0) as u32,
                count: row.count.max(0) as u64,
            })
            .collect())
    }
}
