//! Domain-separated message digest construction.
//!
//! The digest is a single SHA-256 over `prefix + varint(len) + message`,
//! where the prefix tags the bytes as a signed Stacks message and the
//! length is a Bitcoin-style CompactSize varint. The encoding must match
//! the signing side bit-for-bit or every signature fails to verify.

use crate::hash::sha256;
use stacksig_types::MessageDigest;

/// Domain-separation prefix: a length byte (23) followed by the ASCII tag.
pub const MESSAGE_PREFIX: &[u8; 24] = b"\x17Stacks Signed Message:\n";

/// The exact byte string that gets hashed for a message.
pub fn encode_message(message: &str) -> Vec<u8> {
    let bytes = message.as_bytes();
    let mut encoded = Vec::with_capacity(MESSAGE_PREFIX.len() + 9 + bytes.len());
    encoded.extend_from_slice(MESSAGE_PREFIX);
    push_varint(&mut encoded, bytes.len() as u64);
    encoded.extend_from_slice(bytes);
    encoded
}

/// The digest a signature over `message` is verified against.
pub fn message_digest(message: &str) -> MessageDigest {
    MessageDigest::new(sha256(&encode_message(message)))
}

/// CompactSize varint, little-endian in the multi-byte forms.
fn push_varint(out: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xFC => out.push(value as u8),
        0xFD..=0xFFFF => {
            out.push(0xFD);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            out.push(0xFE);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xFF);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_length_byte_matches_tag() {
        assert_eq!(MESSAGE_PREFIX[0] as usize, MESSAGE_PREFIX.len() - 1);
    }

    #[test]
    fn encode_hello_pinned() {
        assert_eq!(
            hex::encode(encode_message("hello")),
            "17537461636b73205369676e6564204d6573736167653a0a0568656c6c6f"
        );
    }

    #[test]
    fn digest_hello_pinned() {
        assert_eq!(
            message_digest("hello").to_string(),
            "aa05ed72547a69b7ef32901df165f92bb23922adbdd00558e9a8264f53d20889"
        );
    }

    #[test]
    fn digest_deterministic() {
        assert_eq!(message_digest("same input"), message_digest("same input"));
    }

    #[test]
    fn digest_tamper_sensitive() {
        assert_ne!(message_digest("hello"), message_digest("hellp"));
    }

    #[test]
    fn varint_one_byte_boundary() {
        let encoded = encode_message(&"a".repeat(252));
        assert_eq!(encoded[MESSAGE_PREFIX.len()], 0xFC);
    }

    #[test]
    fn varint_three_byte_form() {
        let encoded = encode_message(&"a".repeat(253));
        assert_eq!(
            &encoded[MESSAGE_PREFIX.len()..MESSAGE_PREFIX.len() + 3],
            &[0xFD, 0xFD, 0x00]
        );
        assert_eq!(
            message_digest(&"a".repeat(253)).to_string(),
            "0e68bfb8970c062beccfde6e98c347991aa773f16c7759d0883e9c117a05e99b"
        );
    }

    #[test]
    fn empty_message_still_hashes() {
        let encoded = encode_message("");
        assert_eq!(encoded.len(), MESSAGE_PREFIX.len() + 1);
        assert_eq!(encoded[MESSAGE_PREFIX.len()], 0);
    }
}
