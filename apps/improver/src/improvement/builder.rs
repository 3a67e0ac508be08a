//! Prompt Builder — renders the general and tailoring templates.
//!
//! One builder, parameterized by `TemplateVariant`, covers every template set.
//! Substitution is literal and single-pass: only placeholders that appear in
//! the template text are replaced, and inserted values are never re-scanned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::improvement::job_context::JobContext;
use crate::improvement::prompts::{
    GENERAL_COMPREHENSIVE_TEMPLATE, GENERAL_ESSENTIALS_TEMPLATE, SPECIFIC_TEMPLATE,
};

/// Which general-pass template to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    /// Seven-point checklist with worked example achievements.
    Essentials,
    /// Thirty-point checklist asking for bracketed placeholder metrics.
    #[default]
    Comprehensive,
}

impl TemplateVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Essentials => "essentials",
            TemplateVariant::Comprehensive => "comprehensive",
        }
    }

    fn general_template(&self) -> &'static str {
        match self {
            TemplateVariant::Essentials => GENERAL_ESSENTIALS_TEMPLATE,
            TemplateVariant::Comprehensive => GENERAL_COMPREHENSIVE_TEMPLATE,
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "essentials" => Ok(TemplateVariant::Essentials),
            "comprehensive" => Ok(TemplateVariant::Comprehensive),
            other => Err(format!(
                "unknown template variant '{other}' (expected 'essentials' or 'comprehensive')"
            )),
        }
    }
}

/// The fully substituted instruction text sent to the completion gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    variant: TemplateVariant,
}

impl PromptBuilder {
    pub fn new(variant: TemplateVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> TemplateVariant {
        self.variant
    }

    /// Same builder, different general-pass template.
    pub fn with_variant(self, variant: TemplateVariant) -> Self {
        Self { variant }
    }

    /// General pass: the CV text embedded verbatim in the variant's template.
    pub fn general(&self, cv_text: &str) -> RenderedPrompt {
        RenderedPrompt(render(
            self.variant.general_template(),
            &[("cv_text", cv_text)],
        ))
    }

    /// Tailoring pass: the general-pass draft plus the job context.
    pub fn specific(&self, improved_cv: &str, job: &JobContext) -> RenderedPrompt {
        RenderedPrompt(render(
            SPECIFIC_TEMPLATE,
            &[
                ("job_description", job.job_description()),
                ("minimum_qualification", job.minimum_qualification()),
                ("improved_cv", improved_cv),
            ],
        ))
    }
}

/// Replaces every `{name}` in `template` whose name is listed in `values`.
/// Unknown braces are copied through untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::improvement::prompts::{GENERAL_SECTION_HEADERS, SPECIFIC_SECTION_HEADERS};

    fn job() -> JobContext {
        JobContext::new(
            Some("Backend engineer building payment APIs in Rust".into()),
            Some("BSc Computer Science, 3 years experience".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_render_replaces_known_placeholders() {
        let out = render("Hi {name}, you are {age}.", &[("name", "Ada"), ("age", "36")]);
        assert_eq!(out, "Hi Ada, you are 36.");
    }

    #[test]
    fn test_render_keeps_unknown_and_unbalanced_braces() {
        let out = render("{unknown} {name} {", &[("name", "Ada")]);
        assert_eq!(out, "{unknown} Ada {");
    }

    #[test]
    fn test_render_does_not_rescan_inserted_values() {
        let out = render(
            "A: {a}\nB: {b}",
            &[("a", "contains {b} literally"), ("b", "second")],
        );
        assert_eq!(out, "A: contains {b} literally\nB: second");
    }

    #[test]
    fn test_general_prompt_contains_cv_text_exactly_once() {
        let cv = "Jane Doe, Software Engineer";
        for variant in [TemplateVariant::Essentials, TemplateVariant::Comprehensive] {
            let prompt = PromptBuilder::new(variant).general(cv);
            assert_eq!(prompt.as_str().matches(cv).count(), 1, "variant {variant}");
        }
    }

    #[test]
    fn test_general_prompt_has_invariant_headers() {
        for variant in [TemplateVariant::Essentials, TemplateVariant::Comprehensive] {
            let prompt = PromptBuilder::new(variant).general("cv");
            for header in GENERAL_SECTION_HEADERS {
                assert!(prompt.as_str().contains(header), "{variant} missing {header}");
            }
        }
    }

    #[test]
    fn test_general_prompt_keeps_multiline_text_contiguous() {
        let cv = "Jane Doe\n  Experience\n\t- Built {things}\n\nEducation";
        let prompt = PromptBuilder::default().general(cv);
        assert!(prompt.as_str().contains(cv));
        assert!(!prompt.as_str().contains("{cv_text}"));
    }

    #[test]
    fn test_empty_cv_text_is_passed_through() {
        let prompt = PromptBuilder::default().general("");
        assert!(prompt.as_str().ends_with("### Original CV\n"));
    }

    #[test]
    fn test_variants_render_different_instructions() {
        let essentials = PromptBuilder::new(TemplateVariant::Essentials).general("cv");
        let comprehensive = PromptBuilder::new(TemplateVariant::Comprehensive).general("cv");
        assert_ne!(essentials, comprehensive);
        assert!(comprehensive.as_str().contains("[5%]"));
        assert!(essentials.as_str().contains("without using quantitative metrics"));
    }

    #[test]
    fn test_specific_prompt_embeds_draft_and_job_context() {
        let prompt = PromptBuilder::default().specific("DRAFT CV BODY", &job());
        let text = prompt.as_str();
        for header in SPECIFIC_SECTION_HEADERS {
            assert!(text.contains(header), "missing {header}");
        }
        assert!(text.contains("DRAFT CV BODY"));
        assert!(text.contains("Backend engineer building payment APIs in Rust"));
        assert!(text.contains("BSc Computer Science, 3 years experience"));

        let jd = text.find("### Job Description:").unwrap();
        let mq = text.find("### Minimum Qualification:").unwrap();
        let cv = text.find("### Improved CV:").unwrap();
        assert!(jd < mq && mq < cv);
    }

    #[test]
    fn test_specific_prompt_does_not_expand_placeholders_in_job_text() {
        let job = JobContext::new(Some("See {improved_cv}".into()), Some("none".into())).unwrap();
        let prompt = PromptBuilder::default().specific("DRAFT", &job);
        assert!(prompt.as_str().contains("See {improved_cv}"));
        assert_eq!(prompt.as_str().matches("DRAFT").count(), 1);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("Essentials".parse::<TemplateVariant>().unwrap(), TemplateVariant::Essentials);
        assert_eq!(
            " comprehensive ".parse::<TemplateVariant>().unwrap(),
            TemplateVariant::Comprehensive
        );
        assert!("verbose".parse::<TemplateVariant>().is_err());
        assert_eq!(TemplateVariant::default(), TemplateVariant::Comprehensive);
    }

    #[test]
    fn test_variant_serde_is_snake_case() {
        let v: TemplateVariant = serde_json::from_str(r#""essentials""#).unwrap();
        assert_eq!(v, TemplateVariant::Essentials);
        assert_eq!(serde_json::to_string(&TemplateVariant::Comprehensive).unwrap(), r#""comprehensive""#);
    }
}
