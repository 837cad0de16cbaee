//! Registry of the event kinds the platform publishes.

use crate::error::CodecError;

/// Reference-only list of lessons. Body empty, content lives in tags.
pub const KIND_COURSE_LIST: u32 = 30004;
/// Long-form article with a full body and no price.
pub const KIND_FREE_ARTICLE: u32 = 30023;
/// Classified listing with a full body and a mandatory `price` tag.
pub const KIND_PAID_LISTING: u32 = 30402;

/// Content family a kind number belongs to.
///
/// The lesson/document/video split is deliberately absent here: those are
/// inferred from `t` tags at decode time, not carried by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    CourseList,
    FreeArticle,
    PaidListing,
}

/// What the registry knows about a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub family: ContentFamily,
    /// Whether a `price` tag is meaningful on this kind.
    pub payable: bool,
}

/// Look up the family and payment tier for a kind number.
///
/// Unknown kinds are a hard error, never coerced to a default family;
/// callers decode only the kinds they intend to support.
pub fn classify(kind: u32) -> Result<KindInfo, CodecError> {
    match kind {
        KIND_COURSE_LIST => Ok(KindInfo {
            family: ContentFamily::CourseList,
            payable: true,
        }),
        KIND_FREE_ARTICLE => Ok(KindInfo {
            family: ContentFamily::FreeArticle,
            payable: false,
        }),
        KIND_PAID_LISTING => Ok(KindInfo {
            family: ContentFamily::PaidListing,
            payable: true,
        }),
        other => Err(CodecError::UnknownKind(other)),
    }
}
