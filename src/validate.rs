//! Pre-publication checks on creation drafts.
//!
//! The validator gates the encoders in any publishing pipeline but is not
//! part of the codec itself: encoders accept whatever they are given, and
//! decoders must survive data that was published without these checks.
//!
//! Every violated rule is reported, not just the first, so a creation form
//! can surface all problems at once.

use thiserror::Error;

use crate::content::{CourseDraft, ResourceDraft, ResourceKind};
use crate::error::CodecError;

/// Minimum title length in characters.
const MIN_TITLE: usize = 3;
/// Minimum description/summary length in characters.
const MIN_DESCRIPTION: usize = 10;
/// Minimum resource body length in characters.
const MIN_BODY: usize = 50;

/// One broken publication rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title must be at least {MIN_TITLE} characters")]
    TitleTooShort,
    #[error("description must be at least {MIN_DESCRIPTION} characters")]
    DescriptionTooShort,
    #[error("body must be at least {MIN_BODY} characters")]
    BodyTooShort,
    #[error("author public key is required")]
    MissingAuthor,
    #[error("a course needs at least one lesson")]
    NoLessons,
    #[error("lesson {index}: {field} is required")]
    EmptyLessonField { index: usize, field: &'static str },
    #[error("a video needs a duration")]
    MissingDuration,
}

/// Check a course draft against the publication rules.
pub fn validate_course(draft: &CourseDraft) -> Result<(), CodecError> {
    let mut violations = Vec::new();
    check_common(
        &draft.title,
        &draft.description,
        &draft.pubkey,
        &mut violations,
    );
    if draft.lessons.is_empty() {
        violations.push(Violation::NoLessons);
    }
    for (index, lesson) in draft.lessons.iter().enumerate() {
        for (value, field) in [
            (&lesson.title, "title"),
            (&lesson.description, "description"),
            (&lesson.body, "body"),
        ] {
            if value.trim().is_empty() {
                violations.push(Violation::EmptyLessonField { index, field });
            }
        }
    }
    finish(violations)
}

/// Check a resource draft against the publication rules.
pub fn validate_resource(draft: &ResourceDraft, kind: ResourceKind) -> Result<(), CodecError> {
    let mut violations = Vec::new();
    check_common(&draft.title, &draft.summary, &draft.pubkey, &mut violations);
    if draft.body.trim().chars().count() < MIN_BODY {
        violations.push(Violation::BodyTooShort);
    }
    if kind == ResourceKind::Video
        && draft.duration.as_deref().map_or(true, |d| d.trim().is_empty())
    {
        violations.push(Violation::MissingDuration);
    }
    finish(violations)
}

fn check_common(title: &str, description: &str, pubkey: &str, violations: &mut Vec<Violation>) {
    if title.trim().chars().count() < MIN_TITLE {
        violations.push(Violation::TitleTooShort);
    }
    if description.trim().chars().count() < MIN_DESCRIPTION {
        violations.push(Violation::DescriptionTooShort);
    }
    if pubkey.trim().is_empty() {
        violations.push(Violation::MissingAuthor);
    }
}

fn finish(violations: Vec<Violation>) -> Result<(), CodecError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CodecError::Validation(violations))
    }
}
