//! Encoding creation drafts into publishable envelopes.
//!
//! The encoders are the inverse of the decoders: a draft accepted by the
//! validator encodes to an envelope the matching decoder reproduces, with
//! one accepted exception (the platform marker topic, which decode drops).
//!
//! Tag construction order is deliberate and load-bearing: `a` tags are
//! emitted in draft order and never reordered or deduplicated, because
//! that order is the only source of truth for lesson ordering on decode.
//!
//! Encoders perform no validation. Callers run the validator first;
//! malformed-but-already-encoded data must still decode without crashing.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::content::{CourseDraft, ResourceDraft, ResourceKind};
use crate::event::{Event, Tag};
use crate::kind::{KIND_COURSE_LIST, KIND_FREE_ARTICLE, KIND_PAID_LISTING};
use crate::vocab::{PLATFORM_MARKER, VIDEO_TOPIC};

/// Build the `d` identifier from a title: lowercase, every run of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Encode a course draft as a course list envelope.
///
/// The envelope `id` and `sig` are left empty for the external signer;
/// the `d` slug is what makes the event replaceable.
pub fn encode_course_list(draft: &CourseDraft) -> Event {
    let created_at = now();
    let published_at = draft
        .published_at
        .clone()
        .unwrap_or_else(|| created_at.to_string());

    let mut tags = vec![
        Tag::new("d", [slugify(&draft.title)]),
        Tag::new("name", [draft.title.clone()]),
        Tag::new("about", [draft.description.clone()]),
    ];
    if !draft.topics.is_empty() {
        tags.push(Tag::new("l", draft.topics.iter().cloned()));
    }
    tags.push(Tag::new("published_at", [published_at]));
    if let Some(image) = &draft.image {
        tags.push(Tag::new("image", [image.clone()]));
    }
    if draft.premium && draft.price_sats > 0 {
        tags.push(Tag::new(
            "price",
            [draft.price_sats.to_string(), "sats".into()],
        ));
    }
    for lesson in &draft.lessons {
        tags.push(Tag::new("a", [lesson.address().token()]));
    }

    Event {
        id: String::new(),
        pubkey: draft.pubkey.clone(),
        kind: KIND_COURSE_LIST,
        created_at,
        tags,
        content: String::new(),
        sig: String::new(),
    }
}

/// Encode a resource draft as a free article or paid listing envelope.
///
/// The kind is the only place the payment tier lives: paid listing iff the
/// draft is premium with a positive price. The sub-type does not get its
/// own kind; video drafts emit a `video` topic instead so decoding infers
/// it back.
pub fn encode_resource(draft: &ResourceDraft, kind: ResourceKind) -> Event {
    let created_at = now();
    let published_at = draft
        .published_at
        .clone()
        .unwrap_or_else(|| created_at.to_string());
    let paid = draft.premium && draft.price_sats > 0;

    let mut tags = vec![
        Tag::new("d", [slugify(&draft.title)]),
        Tag::new("title", [draft.title.clone()]),
        Tag::new("summary", [draft.summary.clone()]),
    ];
    if let Some(duration) = &draft.duration {
        tags.push(Tag::new("duration", [duration.clone()]));
    }
    tags.push(Tag::new("published_at", [published_at]));
    if paid {
        tags.push(Tag::new(
            "price",
            [draft.price_sats.to_string(), "sats".into()],
        ));
    }
    for topic in &draft.topics {
        tags.push(Tag::new("t", [topic.clone()]));
    }
    if kind == ResourceKind::Video && !draft.topics.iter().any(|t| t == VIDEO_TOPIC) {
        tags.push(Tag::new("t", [VIDEO_TOPIC.to_string()]));
    }
    tags.push(Tag::new("t", [PLATFORM_MARKER.to_string()]));
    if let Some(image) = &draft.image {
        tags.push(Tag::new("image", [image.clone()]));
    }
    for link in &draft.links {
        tags.push(Tag::new("r", [link.clone()]));
    }

    Event {
        id: String::new(),
        pubkey: draft.pubkey.clone(),
        kind: if paid {
            KIND_PAID_LISTING
        } else {
            KIND_FREE_ARTICLE
        },
        created_at,
        tags,
        content: draft.body.clone(),
        sig: String::new(),
    }
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
