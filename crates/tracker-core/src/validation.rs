//! Input rules for each operation.
//!
//! Every function checks all of its rules and reports every failure at once,
//! rather than stopping at the first one.

use crate::domain::{JobChanges, JobFilter, JobQuery, JobSort, JobStatus, JobType, Page};
use crate::error::{DomainError, ValidationErrors};

/// Filter value meaning "do not filter on this field".
pub const ALL: &str = "all";

/// Raw registration input.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Raw login input.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Raw job creation input.
#[derive(Debug, Clone, Default)]
pub struct NewJobInput {
    pub company: String,
    pub position: String,
}

/// Raw job update input.
#[derive(Debug, Clone, Default)]
pub struct JobUpdateInput {
    pub company: String,
    pub position: String,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub job_location: Option<String>,
}

/// Raw listing parameters as they arrive from a query string.
#[derive(Debug, Clone, Default)]
pub struct JobListInput {
    pub search: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if email.is_empty() {
        errors.push("email", "E-mail is required");
    } else if !is_valid_email(email) {
        errors.push("email", "E-mail is not valid");
    }
}

/// Shape rules for registration. Uniqueness is checked by the auth service.
pub fn validate_register(input: &RegisterInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, &input.email);
    errors.require("name", &input.name, "Name is required");
    errors.require("password", &input.password, "Password is required");
    errors
}

/// Shape rules for login. Whether the e-mail is registered is checked by the auth service.
pub fn validate_login(input: &LoginInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&mut errors, &input.email);
    errors.require("password", &input.password, "Password is required");
    errors
}

pub fn validate_new_job(input: &NewJobInput) -> Result<(), DomainError> {
    let mut errors = ValidationErrors::new();
    errors.require("company", &input.company, "Company is required");
    errors.require("position", &input.position, "Position is required");
    errors.into_result()
}

pub fn validate_job_update(input: &JobUpdateInput) -> Result<JobChanges, DomainError> {
    let mut errors = ValidationErrors::new();
    errors.require("company", &input.company, "Company is required");
    errors.require("position", &input.position, "Position is required");

    let status = match input.status.as_deref().map(str::parse::<JobStatus>) {
        Some(Ok(status)) => Some(status),
        _ => {
            errors.push("status", "Status must be one of: interview, declined, pending");
            None
        }
    };

    let job_type = match input.job_type.as_deref().map(str::parse::<JobType>) {
        None => None,
        Some(Ok(job_type)) => Some(job_type),
        Some(Err(_)) => {
            errors.push(
                "jobType",
                "Job type must be one of: full-time, part-time, remote, internship",
            );
            None
        }
    };

    errors.into_result()?;

    Ok(JobChanges {
        company: input.company.clone(),
        position: input.position.clone(),
        status: status.unwrap_or_default(),
        job_type,
        job_location: input.job_location.clone(),
    })
}

fn parse_filter<T: std::str::FromStr>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
) -> Option<T> {
    match value {
        None | Some("") | Some(ALL) => None,
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(field, format!("Unknown {field} filter '{raw}'"));
                None
            }
        },
    }
}

pub fn parse_job_query(input: &JobListInput) -> Result<JobQuery, DomainError> {
    let mut errors = ValidationErrors::new();

    let status = parse_filter::<JobStatus>(&mut errors, "status", input.status.as_deref());
    let job_type = parse_filter::<JobType>(&mut errors, "jobType", input.job_type.as_deref());
    let sort = match input.sort.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<JobSort>() {
            Ok(sort) => Some(sort),
            Err(_) => {
                errors.push("sort", "Sort must be one of: latest, oldest, a-z, z-a");
                None
            }
        },
    };

    errors.into_result()?;

    Ok(JobQuery {
        filter: JobFilter {
            search: input.search.clone().filter(|s| !s.is_empty()),
            status,
            job_type,
        },
        sort,
        page: input.page.map(Page::new).unwrap_or_default(),
    })
}
