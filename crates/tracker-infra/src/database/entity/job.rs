//! Job entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use tracker_core::domain::{JobStatus, JobType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub company: String,
    pub position: String,
    pub status: Status,
    pub job_type: Kind,
    pub job_location: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// `jobs.status` column values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "interview")]
    Interview,
    #[sea_orm(string_value = "declined")]
    Declined,
}

/// `jobs.job_type` column values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Kind {
    #[sea_orm(string_value = "full-time")]
    FullTime,
    #[sea_orm(string_value = "part-time")]
    PartTime,
    #[sea_orm(string_value = "remote")]
    Remote,
    #[sea_orm(string_value = "internship")]
    Internship,
}

impl From<JobStatus> for Status {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Status::Pending,
            JobStatus::Interview => Status::Interview,
            JobStatus::Declined => Status::Declined,
        }
    }
}

impl From<Status> for JobStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => JobStatus::Pending,
            Status::Interview => JobStatus::Interview,
            Status::Declined => JobStatus::Declined,
        }
    }
}

impl From<JobType> for Kind {
    fn from(job_type: JobType) -> Self {
        match job_type {
            JobType::FullTime => Kind::FullTime,
            JobType::PartTime => Kind::PartTime,
            JobType::Remote => Kind::Remote,
            JobType::Internship => Kind::Internship,
        }
    }
}

impl From<Kind> for JobType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::FullTime => JobType::FullTime,
            Kind::PartTime => JobType::PartTime,
            Kind::Remote => JobType::Remote,
            Kind::Internship => JobType::Internship,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Job.
impl From<Model> for tracker_core::domain::Job {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            company: model.company,
            position: model.position,
            status: model.status.into(),
            job_type: model.job_type.into(),
            job_location: model.job_location,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Job to SeaORM ActiveModel.
impl From<tracker_core::domain::Job> for ActiveModel {
    fn from(job: tracker_core::domain::Job) -> Self {
        Self {
            id: Set(job.id),
            owner_id: Set(job.owner_id),
            company: Set(job.company),
            position: Set(job.position),
            status: Set(job.status.into()),
            job_type: Set(job.job_type.into()),
            job_location: Set(job.job_location),
            created_at: Set(job.created_at.into()),
            updated_at: Set(job.updated_at.into()),
        }
    }
}
