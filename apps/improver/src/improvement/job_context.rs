use serde::Serialize;
use thiserror::Error;

/// Raised when a tailored request lacks either job field. Nothing is sent
/// to the completion gateway when this happens.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Please enter both job description and minimum qualification.")]
pub struct JobContextError {
    pub missing_fields: Vec<&'static str>,
}

/// Job description and minimum qualification for the tailoring pass.
/// Free text, no local length limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobContext {
    job_description: String,
    minimum_qualification: String,
}

impl JobContext {
    /// Both fields must be present and non-empty. Whitespace counts as
    /// content. The stored text is kept exactly as supplied.
    pub fn new(
        job_description: Option<String>,
        minimum_qualification: Option<String>,
    ) -> Result<Self, JobContextError> {
        let mut missing_fields = Vec::new();
        if is_missing(job_description.as_deref()) {
            missing_fields.push("job_description");
        }
        if is_missing(minimum_qualification.as_deref()) {
            missing_fields.push("minimum_qualification");
        }

        match (job_description, minimum_qualification) {
            (Some(job_description), Some(minimum_qualification)) if missing_fields.is_empty() => {
                Ok(Self {
                    job_description,
                    minimum_qualification,
                })
            }
            _ => Err(JobContextError { missing_fields }),
        }
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn minimum_qualification(&self) -> &str {
        &self.minimum_qualification
    }
}

fn is_missing(value: Option<&str>) -> bool {
    value.map(str::is_empty).unwrap_or(true)
}
