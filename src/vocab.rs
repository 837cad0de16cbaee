//! The closed tag vocabulary recognized by the decoders.
//!
//! Several wire keys alias the same logical field (`title`/`name`,
//! `summary`/`description`/`about`, `image`/`picture`) because upstream
//! publishers drifted between legacy and current keys. Classification into
//! [`TagKey`] happens once at decode entry; everything after that matches
//! on the enum, never on raw strings.

/// Topic value marking an event as a platform-internal listing. Emitted by
/// the encoders on every resource and dropped again from `topics` at
/// decode time.
pub const PLATFORM_MARKER: &str = "coursr";

/// Topic value that flags a resource as a video.
pub const VIDEO_TOPIC: &str = "video";

/// Logical field a wire tag key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    /// `d` – replaceable-event identifier.
    Identifier,
    /// `title` or `name` – display title.
    Title,
    /// `summary`, `description`, or `about` – display summary.
    Summary,
    /// `image` or `picture` – cover image URL.
    Image,
    /// `published_at` – publication timestamp, seconds as a string.
    PublishedAt,
    /// `price` – price in sats.
    Price,
    /// `author` – display author name.
    Author,
    /// `duration` – video length, free-form string.
    Duration,
    /// `l` – category labels; every value after the key counts.
    Category,
    /// `t` – topic hashtag.
    Topic,
    /// `r` – external link.
    Reference,
    /// `a` – address of another event.
    Address,
    /// Anything else; carried through untouched and ignored by decoders.
    Unrecognized,
}

impl TagKey {
    /// Map a wire key onto its logical field.
    pub fn classify(key: &str) -> TagKey {
        match key {
            "d" => TagKey::Identifier,
            "title" | "name" => TagKey::Title,
            "summary" | "description" | "about" => TagKey::Summary,
            "image" | "picture" => TagKey::Image,
            "published_at" => TagKey::PublishedAt,
            "price" => TagKey::Price,
            "author" => TagKey::Author,
            "duration" => TagKey::Duration,
            "l" => TagKey::Category,
            "t" => TagKey::Topic,
            "r" => TagKey::Reference,
            "a" => TagKey::Address,
            _ => TagKey::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_collapse_to_one_field() {
        assert_eq!(TagKey::classify("title"), TagKey::Title);
        assert_eq!(TagKey::classify("name"), TagKey::Title);
        assert_eq!(TagKey::classify("summary"), TagKey::Summary);
        assert_eq!(TagKey::classify("description"), TagKey::Summary);
        assert_eq!(TagKey::classify("about"), TagKey::Summary);
        assert_eq!(TagKey::classify("image"), TagKey::Image);
        assert_eq!(TagKey::classify("picture"), TagKey::Image);
    }

    #[test]
    fn unknown_keys_are_unrecognized() {
        assert_eq!(TagKey::classify("e"), TagKey::Unrecognized);
        assert_eq!(TagKey::classify(""), TagKey::Unrecognized);
        assert_eq!(TagKey::classify("Title"), TagKey::Unrecognized);
    }
}
