//! Error taxonomy for the codec.

use thiserror::Error;

use crate::validate::Violation;

/// Errors produced while decoding envelopes, resolving addresses, or
/// validating creation drafts.
///
/// Decode errors are scoped to a single event: a batch decode catches the
/// error for one envelope and keeps going. Tag-level problems (a bare key
/// with no value, an `a` tag that does not parse) never surface here at
/// all; the decoders skip them and carry on.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The event kind is not one this platform publishes.
    #[error("unknown event kind: {0}")]
    UnknownKind(u32),
    /// The event kind is known but belongs to a different content family
    /// than the decoder that was called.
    #[error("kind {kind} is not a {expected} event")]
    WrongFamily { kind: u32, expected: &'static str },
    /// An address token did not have the `kind:pubkey:identifier` shape.
    #[error("bad address token `{token}`: {reason}")]
    AddressParse { token: String, reason: &'static str },
    /// An `naddr` string failed to encode or decode.
    #[error("bad naddr: {0}")]
    Naddr(String),
    /// A creation draft broke one or more publication rules.
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
