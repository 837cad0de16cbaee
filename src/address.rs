//! Addressable references between events.
//!
//! A course never embeds its lessons; each lesson is published as its own
//! replaceable event and the course carries one `a` tag per lesson holding
//! a `kind:pubkey:identifier` token. This module builds and parses those
//! tokens, and provides the shareable `naddr` bech32 form of the same
//! triple (NIP-19 TLV layout) for use outside the platform.

use std::fmt;

use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Human-readable part of a shareable address.
const NADDR_HRP: &str = "naddr";

/// TLV type for the `d` identifier.
const TLV_SPECIAL: u8 = 0;
/// TLV type for a relay hint; may repeat.
const TLV_RELAY: u8 = 1;
/// TLV type for the 32-byte author key.
const TLV_AUTHOR: u8 = 2;
/// TLV type for the kind, big-endian u32.
const TLV_KIND: u8 = 3;

/// Composite key resolving to a specific replaceable event.
///
/// This is a weak reference by identity: it never carries the referenced
/// content, and resolution (looking the event up somewhere) is not the
/// codec's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressRef {
    pub kind: u32,
    pub pubkey: String,
    pub identifier: String,
}

impl AddressRef {
    pub fn new(kind: u32, pubkey: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            pubkey: pubkey.into(),
            identifier: identifier.into(),
        }
    }

    /// The colon-joined wire token used verbatim inside `a` tags.
    pub fn token(&self) -> String {
        format!("{}:{}:{}", self.kind, self.pubkey, self.identifier)
    }

    /// Parse an `a`-tag token.
    ///
    /// Splits into at most three segments so identifiers containing `:`
    /// survive. Author key length and charset are deliberately not checked
    /// here; that belongs to the key-validation layer.
    pub fn parse(token: &str) -> Result<Self, CodecError> {
        let mut parts = token.splitn(3, ':');
        let (Some(kind), Some(pubkey), Some(identifier)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(CodecError::AddressParse {
                token: token.into(),
                reason: "expected kind:pubkey:identifier",
            });
        };
        let kind: u32 = kind.parse().map_err(|_| CodecError::AddressParse {
            token: token.into(),
            reason: "kind is not an integer",
        })?;
        Ok(Self::new(kind, pubkey, identifier))
    }

    /// Encode as a shareable `naddr1...` string with optional relay hints.
    ///
    /// The author key must be 64 hex characters here: the TLV layout stores
    /// it as raw bytes, unlike the colon token which passes it through.
    pub fn to_naddr(&self, relays: &[String]) -> Result<String, CodecError> {
        let author = hex::decode(&self.pubkey)
            .map_err(|_| CodecError::Naddr("author key is not hex".into()))?;
        if author.len() != 32 {
            return Err(CodecError::Naddr(format!(
                "author key must be 32 bytes, got {}",
                author.len()
            )));
        }
        let mut data = Vec::new();
        push_tlv(&mut data, TLV_SPECIAL, self.identifier.as_bytes())?;
        for relay in relays {
            push_tlv(&mut data, TLV_RELAY, relay.as_bytes())?;
        }
        push_tlv(&mut data, TLV_AUTHOR, &author)?;
        push_tlv(&mut data, TLV_KIND, &self.kind.to_be_bytes())?;
        let hrp = Hrp::parse(NADDR_HRP).expect("static hrp");
        bech32::encode::<Bech32>(hrp, &data).map_err(|e| CodecError::Naddr(e.to_string()))
    }

    /// Decode an `naddr1...` string into the reference plus relay hints.
    pub fn from_naddr(s: &str) -> Result<(Self, Vec<String>), CodecError> {
        let (hrp, data) =
            bech32::decode(s.trim()).map_err(|e| CodecError::Naddr(e.to_string()))?;
        if !hrp.as_str().eq_ignore_ascii_case(NADDR_HRP) {
            return Err(CodecError::Naddr(format!(
                "expected hrp `{NADDR_HRP}`, got `{}`",
                hrp.as_str()
            )));
        }
        let mut identifier = None;
        let mut pubkey = None;
        let mut kind = None;
        let mut relays = Vec::new();
        let mut rest = data.as_slice();
        while !rest.is_empty() {
            if rest.len() < 2 {
                return Err(CodecError::Naddr("truncated tlv header".into()));
            }
            let (ty, len) = (rest[0], rest[1] as usize);
            rest = &rest[2..];
            if rest.len() < len {
                return Err(CodecError::Naddr("truncated tlv value".into()));
            }
            let (value, tail) = rest.split_at(len);
            rest = tail;
            match ty {
                TLV_SPECIAL => {
                    identifier = Some(
                        String::from_utf8(value.to_vec())
                            .map_err(|_| CodecError::Naddr("identifier is not utf-8".into()))?,
                    );
                }
                TLV_RELAY => {
                    relays.push(String::from_utf8_lossy(value).into_owned());
                }
                TLV_AUTHOR => {
                    if value.len() != 32 {
                        return Err(CodecError::Naddr("author key must be 32 bytes".into()));
                    }
                    pubkey = Some(hex::encode(value));
                }
                TLV_KIND => {
                    let bytes: [u8; 4] = value
                        .try_into()
                        .map_err(|_| CodecError::Naddr("kind must be 4 bytes".into()))?;
                    kind = Some(u32::from_be_bytes(bytes));
                }
                // unknown TLV types are skipped for forward compatibility
                _ => {}
            }
        }
        match (identifier, pubkey, kind) {
            (Some(identifier), Some(pubkey), Some(kind)) => {
                Ok((Self::new(kind, pubkey, identifier), relays))
            }
            _ => Err(CodecError::Naddr(
                "missing identifier, author, or kind tlv".into(),
            )),
        }
    }
}

impl fmt::Display for AddressRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

fn push_tlv(out: &mut Vec<u8>, ty: u8, value: &[u8]) -> Result<(), CodecError> {
    if value.len() > u8::MAX as usize {
        return Err(CodecError::Naddr(format!(
            "tlv value too long: {} bytes",
            value.len()
        )));
    }
    out.push(ty);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    Ok(())
}
