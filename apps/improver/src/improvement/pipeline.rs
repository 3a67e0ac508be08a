//! Improvement pipeline — runs the general pass and, for tailored requests,
//! the specific pass on top of it.
//!
//! Flow: general prompt → gateway → [specific prompt (draft + job) → gateway].
//!
//! Tailored requests always cost two sequential gateway calls. A failed
//! general pass ends the run before the specific pass is issued.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::improvement::builder::{PromptBuilder, TemplateVariant};
use crate::improvement::job_context::{JobContext, JobContextError};
use crate::llm_client::{CompletionGateway, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImproveMode {
    #[default]
    General,
    Specific,
}

impl fmt::Display for ImproveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImproveMode::General => f.write_str("general"),
            ImproveMode::Specific => f.write_str("specific"),
        }
    }
}

impl FromStr for ImproveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(ImproveMode::General),
            "specific" => Ok(ImproveMode::Specific),
            other => Err(format!(
                "unknown mode '{other}' (expected 'general' or 'specific')"
            )),
        }
    }
}

/// What a single run should produce. Built before any extraction or
/// gateway work so missing job fields are caught up front.
#[derive(Debug, Clone)]
pub enum ImproveTarget {
    General,
    Specific(JobContext),
}

impl ImproveTarget {
    /// Job fields are ignored in general mode and required in specific mode.
    pub fn from_parts(
        mode: ImproveMode,
        job_description: Option<String>,
        minimum_qualification: Option<String>,
    ) -> Result<Self, JobContextError> {
        match mode {
            ImproveMode::General => Ok(ImproveTarget::General),
            ImproveMode::Specific => {
                JobContext::new(job_description, minimum_qualification).map(ImproveTarget::Specific)
            }
        }
    }

    pub fn mode(&self) -> ImproveMode {
        match self {
            ImproveTarget::General => ImproveMode::General,
            ImproveTarget::Specific(_) => ImproveMode::Specific,
        }
    }
}

/// Result of one run. `result` is the gateway's text, unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct ImproveOutcome {
    pub request_id: Uuid,
    pub mode: ImproveMode,
    pub variant: TemplateVariant,
    pub result: String,
    pub completed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Passes
// ────────────────────────────────────────────────────────────────────────────

/// One gateway call with the general-pass prompt.
pub async fn improve_general(
    gateway: &dyn CompletionGateway,
    builder: &PromptBuilder,
    cv_text: &str,
) -> Result<String, LlmError> {
    let prompt = builder.general(cv_text);
    info!(
        "General pass: variant={}, prompt_len={}",
        builder.variant(),
        prompt.len()
    );
    let improved = gateway.complete(prompt.as_str()).await?;
    info!("General pass complete: result_len={}", improved.len());
    Ok(improved)
}

/// General pass, then the tailoring pass over its draft.
pub async fn improve_specific(
    gateway: &dyn CompletionGateway,
    builder: &PromptBuilder,
    cv_text: &str,
    job: &JobContext,
) -> Result<String, LlmError> {
    let draft = improve_general(gateway, builder, cv_text).await?;

    let prompt = builder.specific(&draft, job);
    info!("Specific pass: prompt_len={}", prompt.len());
    let tailored = gateway.complete(prompt.as_str()).await?;
    info!("Specific pass complete: result_len={}", tailored.len());
    Ok(tailored)
}

/// Runs one interaction end to end under its own request id.
pub async fn run(
    gateway: &dyn CompletionGateway,
    builder: &PromptBuilder,
    cv_text: &str,
    target: &ImproveTarget,
) -> Result<ImproveOutcome, LlmError> {
    let request_id = Uuid::new_v4();
    let mode = target.mode();
    let span = info_span!("improve", %request_id, %mode);

    async move {
        let result = match target {
            ImproveTarget::General => improve_general(gateway, builder, cv_text).await?,
            ImproveTarget::Specific(job) => improve_specific(gateway, builder, cv_text, job).await?,
        };
        Ok::<_, LlmError>(ImproveOutcome {
            request_id,
            mode,
            variant: builder.variant(),
            result,
            completed_at: Utc::now(),
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGateway;

    fn job() -> JobContext {
        JobContext::new(
            Some("Senior Rust engineer, payments".into()),
            Some("5 years backend experience".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_general_sends_exact_prompt_once() {
        let gateway = ScriptedGateway::new(vec![Ok("IMPROVED".into())]);
        let builder = PromptBuilder::default();
        let cv = "Jane Doe, Software Engineer";

        let result = improve_general(&gateway, &builder, cv).await.unwrap();

        assert_eq!(result, "IMPROVED");
        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], builder.general(cv).as_str());
        assert_eq!(prompts[0].matches(cv).count(), 1);
    }

    #[tokio::test]
    async fn test_specific_issues_two_calls_in_order() {
        let gateway = ScriptedGateway::new(vec![Ok("DRAFT-FROM-GENERAL".into()), Ok("TAILORED".into())]);
        let builder = PromptBuilder::default();
        let job = job();

        let result = improve_specific(&gateway, &builder, "cv body", &job).await.unwrap();

        assert_eq!(result, "TAILORED");
        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], builder.general("cv body").as_str());
        assert_eq!(prompts[1], builder.specific("DRAFT-FROM-GENERAL", &job).as_str());
        assert!(prompts[1].contains("Senior Rust engineer, payments"));
    }

    #[tokio::test]
    async fn test_failed_general_pass_prevents_specific_pass() {
        let gateway = ScriptedGateway::new(vec![Err(LlmError::Api {
            status: 403,
            message: "quota exceeded".into(),
        })]);
        let builder = PromptBuilder::default();

        let err = improve_specific(&gateway, &builder, "cv", &job()).await.unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 403, .. }));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_specific_pass_propagates() {
        let gateway = ScriptedGateway::new(vec![Ok("draft".into()), Err(LlmError::EmptyContent)]);
        let err = improve_specific(&gateway, &PromptBuilder::default(), "cv", &job())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_cv_text_still_runs() {
        let gateway = ScriptedGateway::new(vec![Ok("".into())]);
        let builder = PromptBuilder::default();

        let result = improve_general(&gateway, &builder, "").await.unwrap();

        assert_eq!(result, "");
        assert_eq!(gateway.prompts()[0], builder.general("").as_str());
    }

    #[tokio::test]
    async fn test_run_reports_mode_and_variant() {
        let gateway = ScriptedGateway::new(vec![Ok("a".into()), Ok("b".into())]);
        let builder = PromptBuilder::new(TemplateVariant::Essentials);
        let target = ImproveTarget::Specific(job());

        let outcome = run(&gateway, &builder, "cv", &target).await.unwrap();

        assert_eq!(outcome.mode, ImproveMode::Specific);
        assert_eq!(outcome.variant, TemplateVariant::Essentials);
        assert_eq!(outcome.result, "b");
    }

    #[test]
    fn test_target_general_ignores_job_fields() {
        let target = ImproveTarget::from_parts(ImproveMode::General, None, None).unwrap();
        assert_eq!(target.mode(), ImproveMode::General);
    }

    #[test]
    fn test_target_specific_requires_both_fields() {
        let err = ImproveTarget::from_parts(ImproveMode::Specific, Some("jd".into()), Some("".into()))
            .unwrap_err();
        assert_eq!(err.missing_fields, vec!["minimum_qualification"]);
    }

    #[tokio::test]
    async fn test_whitespace_job_fields_still_run_both_passes() {
        let target = ImproveTarget::from_parts(ImproveMode::Specific, Some("  ".into()), Some("\n".into()))
            .unwrap();
        let gateway = ScriptedGateway::new(vec![Ok("draft".into()), Ok("tailored".into())]);

        let outcome = run(&gateway, &PromptBuilder::default(), "cv", &target).await.unwrap();

        assert_eq!(outcome.result, "tailored");
        assert_eq!(gateway.call_count(), 2);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Specific".parse::<ImproveMode>().unwrap(), ImproveMode::Specific);
        assert!("tailored".parse::<ImproveMode>().is_err());
    }
}
