//! Typed domain records the codec produces and consumes.
//!
//! Parsed records are derived values: recomputed on every decode, never
//! mutated in place. Draft records are the creation payloads the encoders
//! turn back into envelopes, after the validator has passed them.

use serde::{Deserialize, Serialize};

use crate::address::AddressRef;

/// Sub-type of a decoded resource, inferred from `t` tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Document,
    Video,
}

/// Content family a resource draft is encoded as.
///
/// Lessons and documents share a wire shape; videos additionally carry a
/// duration and a `video` topic so the sub-type survives decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Lesson,
    Document,
    Video,
}

/// A decoded course list event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCourse {
    /// The `d` identifier. Empty when the event carried no `d` tag; such
    /// events are accepted rather than rejected.
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Seconds as a string; falls back to the envelope `created_at`.
    pub published_at: String,
    pub created_at: u64,
    /// Union of `l` and `t` values in insertion order.
    pub topics: Vec<String>,
    /// Present only when a `price` tag parsed to a positive integer.
    pub price_sats: Option<u64>,
    /// One entry per `a` tag. Tag order is the authoritative lesson order.
    pub lessons: Vec<AddressRef>,
}

/// A decoded lesson, document, or video event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResource {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub published_at: String,
    pub created_at: u64,
    pub topics: Vec<String>,
    /// Inferred from `t` tags; `video` when one equals the video marker.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Display author name from an `author` tag, if present.
    pub author: Option<String>,
    pub price_sats: Option<u64>,
    /// Video length from a `duration` tag, if present.
    pub duration: Option<String>,
    /// External links from `r` tags, order preserved.
    pub links: Vec<String>,
    /// Backward reference to the course this resource belongs to.
    pub course: Option<AddressRef>,
    /// Markdown body from the envelope content.
    pub body: String,
}

/// Creation payload for a course list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Author public key (hex) the envelope is published under.
    pub pubkey: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub price_sats: u64,
    /// Explicit publication timestamp; defaults to the envelope timestamp.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Lessons in display order. The encoder never reorders these.
    pub lessons: Vec<LessonDraft>,
}

/// A lesson entry inside a [`CourseDraft`].
///
/// Lessons are published as their own events before the course list is
/// built, so the draft carries both the lesson's own content (checked by
/// the validator) and the coordinates of its published event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    /// Kind of the published lesson event.
    pub kind: u32,
    /// Author key of the published lesson event.
    pub pubkey: String,
    /// `d` identifier of the published lesson event.
    pub identifier: String,
}

impl LessonDraft {
    /// The address the course's `a` tag will point at.
    pub fn address(&self) -> AddressRef {
        AddressRef::new(self.kind, self.pubkey.clone(), self.identifier.clone())
    }
}

/// Creation payload for a lesson, document, or video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub summary: String,
    /// Markdown body; becomes the envelope content.
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    /// Required for videos, ignored otherwise.
    #[serde(default)]
    pub duration: Option<String>,
    pub pubkey: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub price_sats: u64,
    #[serde(default)]
    pub published_at: Option<String>,
}
