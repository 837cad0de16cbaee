//! coursr – codec between Nostr event envelopes and typed course content.
//!
//! A course platform stores everything display-worthy (titles, summaries,
//! images, pricing, lesson ordering, video URLs) inside generic tag-bag
//! events; the database keeps only minimal metadata next to an event
//! reference. This crate is the bidirectional transformation between that
//! wire form and typed domain records:
//!
//! - [`decode::decode_course_list`] / [`decode::decode_resource`] fold an
//!   envelope's tag list into [`content::ParsedCourse`] /
//!   [`content::ParsedResource`].
//! - [`encode::encode_course_list`] / [`encode::encode_resource`] build the
//!   envelope a decoder would reproduce from a validated creation draft.
//! - [`address::AddressRef`] carries the `kind:pubkey:identifier` triple a
//!   course uses to point at its lessons, with both the colon token and the
//!   shareable `naddr` bech32 form.
//! - [`validate`] gates the encoders with the publication rules.
//!
//! Everything here is a pure, synchronous transformation over immutable
//! values; signing, transport, and persistence live elsewhere.

pub mod address;
pub mod content;
pub mod decode;
pub mod encode;
pub mod error;
pub mod event;
pub mod kind;
pub mod validate;
pub mod vocab;

pub use address::AddressRef;
pub use content::{
    CourseDraft, LessonDraft, ParsedCourse, ParsedResource, ResourceDraft, ResourceKind,
    ResourceType,
};
pub use decode::{decode_course_list, decode_resource};
pub use encode::{encode_course_list, encode_resource};
pub use error::CodecError;
pub use event::{Event, Tag};
pub use kind::{classify, ContentFamily, KindInfo};
pub use validate::{validate_course, validate_resource, Violation};
