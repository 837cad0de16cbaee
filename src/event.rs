//! Nostr event envelope model.

use serde::{Deserialize, Serialize};

/// Wrapper for a Nostr tag expressed as an array of strings.
///
/// Tags appear as small arrays where the first element denotes the key and
/// the following elements hold data. The course platform stores all of its
/// display content in tags, for example:
///
/// - `d` – replaceable-event identifier (the course or resource slug)
/// - `name` / `title` – display title
/// - `price` – price in sats for paid listings
/// - `a` – address of another event, e.g. a course pointing at a lesson
///
/// Each tag is stored verbatim so uncommon or custom tags survive a
/// decode/encode cycle. A `["t", "bitcoin"]` tag from the wire becomes
/// `Tag(vec!["t".into(), "bitcoin".into()])`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from a key and its values.
    pub fn new<K: Into<String>>(key: K, values: impl IntoIterator<Item = String>) -> Self {
        let mut fields = vec![key.into()];
        fields.extend(values);
        Tag(fields)
    }

    /// The tag key, if the tag is not empty.
    pub fn key(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The first value after the key, if present.
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// All values after the key. Empty for a bare key.
    pub fn values(&self) -> &[String] {
        self.0.get(1..).unwrap_or(&[])
    }
}

/// Nostr event envelope carrying platform content.
///
/// ```json
/// {
///   "id": "aa11",
///   "pubkey": "npub...",
///   "kind": 30023,
///   "created_at": 1700000000,
///   "tags": [["d", "intro-to-x"], ["title", "Intro to X"]],
///   "content": "full markdown body",
///   "sig": "deadbeef"
/// }
/// ```
///
/// The codec treats `id` and `sig` as opaque pass-through strings; encoders
/// leave both empty for the external signing step to fill in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Event identifier (hex of SHA-256 hash), assigned at signing time.
    pub id: String,
    /// Author public key (hex).
    pub pubkey: String,
    /// Kind number, e.g. `30023` or `30402`.
    pub kind: u32,
    /// Unix timestamp of creation.
    pub created_at: u64,
    /// Ordered tag list; the only carrier of structured metadata.
    pub tags: Vec<Tag>,
    /// Free-text body (markdown for articles, empty for course lists).
    pub content: String,
    /// Schnorr signature, unchecked by the codec.
    pub sig: String,
}
