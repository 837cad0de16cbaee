//! Decoding envelopes into typed content records.
//!
//! Both decoders are a single left-to-right fold over the tag list into an
//! accumulator. Single-value logical fields take the last occurrence across
//! all of their alias keys, so an envelope carrying both a legacy and a
//! current key for the same concept ends up with the later one. Repeatable
//! fields append every occurrence in tag order.
//!
//! Tag-level problems never fail a decode: a bare key with no value is
//! skipped, an `a` value that is not a valid address is skipped with a
//! debug log and the remaining references still come through. Only a kind
//! the registry does not know is fatal, and then only for that one event.

use tracing::debug;

use crate::address::AddressRef;
use crate::content::{ParsedCourse, ParsedResource, ResourceType};
use crate::error::CodecError;
use crate::event::Event;
use crate::kind::{classify, ContentFamily};
use crate::vocab::{TagKey, PLATFORM_MARKER, VIDEO_TOPIC};

/// Decode a course list event into a [`ParsedCourse`].
pub fn decode_course_list(ev: &Event) -> Result<ParsedCourse, CodecError> {
    let info = classify(ev.kind)?;
    if info.family != ContentFamily::CourseList {
        return Err(CodecError::WrongFamily {
            kind: ev.kind,
            expected: "course list",
        });
    }

    let mut course = ParsedCourse {
        created_at: ev.created_at,
        ..ParsedCourse::default()
    };
    for tag in &ev.tags {
        let Some(key) = tag.key() else { continue };
        match TagKey::classify(key) {
            TagKey::Identifier => set_last(&mut course.id, tag.value()),
            TagKey::Title => set_last(&mut course.name, tag.value()),
            TagKey::Summary => set_last(&mut course.description, tag.value()),
            TagKey::Image => set_last(&mut course.image, tag.value()),
            TagKey::PublishedAt => set_last(&mut course.published_at, tag.value()),
            TagKey::Price => price_tag(&mut course.price_sats, tag.value()),
            TagKey::Category => {
                // an `l` tag may carry several labels after the key
                course.topics.extend(tag.values().iter().cloned());
            }
            TagKey::Topic => {
                if let Some(v) = tag.value() {
                    course.topics.push(v.to_string());
                }
            }
            TagKey::Address => {
                if let Some(token) = tag.value() {
                    match AddressRef::parse(token) {
                        Ok(addr) => course.lessons.push(addr),
                        Err(err) => debug!(event = %ev.id, %token, %err, "skipping lesson reference"),
                    }
                }
            }
            _ => {}
        }
    }
    if course.published_at.is_empty() {
        course.published_at = ev.created_at.to_string();
    }
    Ok(course)
}

/// Decode a free article or paid listing into a [`ParsedResource`].
pub fn decode_resource(ev: &Event) -> Result<ParsedResource, CodecError> {
    let info = classify(ev.kind)?;
    if info.family == ContentFamily::CourseList {
        return Err(CodecError::WrongFamily {
            kind: ev.kind,
            expected: "resource",
        });
    }

    let mut res = ParsedResource {
        created_at: ev.created_at,
        body: ev.content.clone(),
        ..ParsedResource::default()
    };
    for tag in &ev.tags {
        let Some(key) = tag.key() else { continue };
        match TagKey::classify(key) {
            TagKey::Identifier => set_last(&mut res.id, tag.value()),
            TagKey::Title => set_last(&mut res.title, tag.value()),
            TagKey::Summary => set_last(&mut res.summary, tag.value()),
            TagKey::Image => set_last(&mut res.image, tag.value()),
            TagKey::PublishedAt => set_last(&mut res.published_at, tag.value()),
            TagKey::Price => price_tag(&mut res.price_sats, tag.value()),
            TagKey::Author => {
                if let Some(v) = tag.value() {
                    res.author = Some(v.to_string());
                }
            }
            TagKey::Duration => {
                if let Some(v) = tag.value() {
                    res.duration = Some(v.to_string());
                }
            }
            TagKey::Category => {
                res.topics.extend(tag.values().iter().cloned());
            }
            TagKey::Topic => match tag.value() {
                // the platform's own marker is housekeeping, not a topic
                Some(PLATFORM_MARKER) => {}
                Some(VIDEO_TOPIC) => {
                    res.resource_type = ResourceType::Video;
                    res.topics.push(VIDEO_TOPIC.to_string());
                }
                Some(v) => res.topics.push(v.to_string()),
                None => {}
            },
            TagKey::Reference => {
                if let Some(v) = tag.value() {
                    res.links.push(v.to_string());
                }
            }
            TagKey::Address => {
                if let Some(token) = tag.value() {
                    match AddressRef::parse(token) {
                        Ok(addr) => res.course = Some(addr),
                        Err(err) => debug!(event = %ev.id, %token, %err, "skipping course reference"),
                    }
                }
            }
            _ => {}
        }
    }
    if res.published_at.is_empty() {
        res.published_at = ev.created_at.to_string();
    }
    Ok(res)
}

/// Last occurrence wins for single-value fields.
fn set_last(field: &mut String, value: Option<&str>) {
    if let Some(v) = value {
        *field = v.to_string();
    }
}

/// A price only counts when it parses to a positive integer; `"0"` and
/// non-numeric values mean "no price", not an error.
fn price_tag(field: &mut Option<u64>, value: Option<&str>) {
    if let Some(sats) = value.and_then(|v| v.parse::<u64>().ok()).filter(|s| *s > 0) {
        *field = Some(sats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Tag;
    use crate::kind::{KIND_COURSE_LIST, KIND_FREE_ARTICLE, KIND_PAID_LISTING};

    fn course_event(tags: Vec<Tag>) -> Event {
        Event {
            id: "ev1".into(),
            pubkey: "author".into(),
            kind: KIND_COURSE_LIST,
            created_at: 1700000000,
            tags,
            content: String::new(),
            sig: String::new(),
        }
    }

    fn resource_event(kind: u32, tags: Vec<Tag>) -> Event {
        Event {
            id: "ev2".into(),
            pubkey: "author".into(),
            kind,
            created_at: 1700000000,
            tags,
            content: "# body".into(),
            sig: String::new(),
        }
    }

    fn tag(fields: &[&str]) -> Tag {
        Tag(fields.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn course_basic_fields() {
        let ev = course_event(vec![
            tag(&["d", "intro-to-x"]),
            tag(&["name", "Intro to X"]),
            tag(&["about", "Ten+ chars here"]),
            tag(&["image", "https://example.com/a.png"]),
            tag(&["published_at", "1690000000"]),
        ]);
        let course = decode_course_list(&ev).unwrap();
        assert_eq!(course.id, "intro-to-x");
        assert_eq!(course.name, "Intro to X");
        assert_eq!(course.description, "Ten+ chars here");
        assert_eq!(course.image, "https://example.com/a.png");
        assert_eq!(course.published_at, "1690000000");
        assert_eq!(course.created_at, 1700000000);
    }

    #[test]
    fn later_alias_overwrites_earlier() {
        let ev = course_event(vec![tag(&["title", "A"]), tag(&["name", "B"])]);
        assert_eq!(decode_course_list(&ev).unwrap().name, "B");

        let ev = course_event(vec![tag(&["name", "B"]), tag(&["title", "A"])]);
        assert_eq!(decode_course_list(&ev).unwrap().name, "A");
    }

    #[test]
    fn lesson_references_keep_tag_order() {
        let ev = course_event(vec![
            tag(&["a", "30023:p1:lesson-1"]),
            tag(&["a", "30023:p1:lesson-2"]),
            tag(&["a", "30023:p1:lesson-3"]),
        ]);
        let course = decode_course_list(&ev).unwrap();
        let ids: Vec<_> = course.lessons.iter().map(|a| a.identifier.as_str()).collect();
        assert_eq!(ids, ["lesson-1", "lesson-2", "lesson-3"]);
    }

    #[test]
    fn bad_lesson_reference_skipped_others_kept() {
        let ev = course_event(vec![
            tag(&["a", "30023:p1:lesson-1"]),
            tag(&["a", "not-an-address"]),
            tag(&["a", "30023:p1:lesson-2"]),
        ]);
        let course = decode_course_list(&ev).unwrap();
        assert_eq!(course.lessons.len(), 2);
    }

    #[test]
    fn multi_value_category_appends_each_label() {
        let ev = course_event(vec![
            tag(&["l", "bitcoin", "lightning"]),
            tag(&["t", "beginner"]),
        ]);
        let course = decode_course_list(&ev).unwrap();
        assert_eq!(course.topics, ["bitcoin", "lightning", "beginner"]);
    }

    #[test]
    fn zero_and_garbage_prices_are_no_price() {
        for bad in ["0", "free", "-5", ""] {
            let ev = course_event(vec![tag(&["price", bad])]);
            assert_eq!(decode_course_list(&ev).unwrap().price_sats, None);
        }
        let ev = course_event(vec![tag(&["price", "21000"])]);
        assert_eq!(decode_course_list(&ev).unwrap().price_sats, Some(21000));
    }

    #[test]
    fn bare_tags_are_skipped_not_fatal() {
        let ev = course_event(vec![
            tag(&["price"]),
            Tag(vec![]),
            tag(&["name", "Still decodes"]),
        ]);
        let course = decode_course_list(&ev).unwrap();
        assert_eq!(course.name, "Still decodes");
        assert_eq!(course.price_sats, None);
    }

    #[test]
    fn missing_published_at_falls_back_to_created_at() {
        let ev = course_event(vec![tag(&["name", "X"])]);
        assert_eq!(decode_course_list(&ev).unwrap().published_at, "1700000000");
    }

    #[test]
    fn missing_d_tag_yields_empty_id() {
        let ev = course_event(vec![tag(&["name", "X"])]);
        assert_eq!(decode_course_list(&ev).unwrap().id, "");
    }

    #[test]
    fn unknown_kind_is_fatal() {
        let mut ev = course_event(vec![]);
        ev.kind = 99999;
        assert!(matches!(
            decode_course_list(&ev).unwrap_err(),
            CodecError::UnknownKind(99999)
        ));
    }

    #[test]
    fn wrong_family_is_rejected() {
        let ev = resource_event(KIND_FREE_ARTICLE, vec![]);
        assert!(matches!(
            decode_course_list(&ev).unwrap_err(),
            CodecError::WrongFamily { .. }
        ));
        let ev = course_event(vec![]);
        assert!(matches!(
            decode_resource(&ev).unwrap_err(),
            CodecError::WrongFamily { .. }
        ));
    }

    #[test]
    fn video_topic_sets_subtype_and_stays_in_topics() {
        let ev = resource_event(
            KIND_FREE_ARTICLE,
            vec![tag(&["t", "video"]), tag(&["t", "bitcoin"])],
        );
        let res = decode_resource(&ev).unwrap();
        assert_eq!(res.resource_type, ResourceType::Video);
        assert_eq!(res.topics, ["video", "bitcoin"]);
    }

    #[test]
    fn platform_marker_dropped_from_topics() {
        let ev = resource_event(
            KIND_FREE_ARTICLE,
            vec![tag(&["t", "coursr"]), tag(&["t", "bitcoin"])],
        );
        let res = decode_resource(&ev).unwrap();
        assert_eq!(res.topics, ["bitcoin"]);
        assert_eq!(res.resource_type, ResourceType::Document);
    }

    #[test]
    fn links_keep_order_without_disambiguation() {
        let ev = resource_event(
            KIND_PAID_LISTING,
            vec![
                tag(&["price", "5000"]),
                tag(&["r", "https://example.com/video.mp4"]),
                tag(&["r", "https://example.com/thumb.png"]),
            ],
        );
        let res = decode_resource(&ev).unwrap();
        assert_eq!(
            res.links,
            [
                "https://example.com/video.mp4",
                "https://example.com/thumb.png"
            ]
        );
        assert_eq!(res.price_sats, Some(5000));
    }

    #[test]
    fn resource_author_course_ref_and_body() {
        let ev = resource_event(
            KIND_FREE_ARTICLE,
            vec![
                tag(&["author", "Alice"]),
                tag(&["a", "30004:p1:intro-to-x"]),
                tag(&["duration", "12:34"]),
            ],
        );
        let res = decode_resource(&ev).unwrap();
        assert_eq!(res.author.as_deref(), Some("Alice"));
        assert_eq!(res.course.as_ref().unwrap().identifier, "intro-to-x");
        assert_eq!(res.duration.as_deref(), Some("12:34"));
        assert_eq!(res.body, "# body");
    }
}
