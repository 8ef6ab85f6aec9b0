//! Property-based tests for the token codec
//!
//! Uses proptest to generate random subjects, lifetimes, and tamper
//! positions, and checks that issued tokens decode back to their claims
//! and that replacing any single byte is caught by the signature check.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::time::Duration;

use servdesk::backend::auth::{TokenCodec, TokenError};

const SECRET: &[u8] = b"property-test-secret-with-plenty-of-bytes";
// base64url alphabet plus the segment separator
const TOKEN_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";

fn codec() -> TokenCodec {
    TokenCodec::from_secret(SECRET, Duration::from_secs(60))
}

proptest! {
    #[test]
    fn test_issue_decode_roundtrip(
        subject in "[a-zA-Z0-9_.@-]{1,40}",
        ttl_secs in 1u64..1_000_000,
        issued_at in 0i64..4_000_000_000,
    ) {
        let now = Utc.timestamp_opt(issued_at, 0).unwrap();
        let token = codec()
            .issue_at(&subject, now, Duration::from_secs(ttl_secs))
            .unwrap();

        let claims = codec().decode(&token).unwrap();

        prop_assert!(!claims.is_expired_at(now));
        prop_assert_eq!(&claims.sub, &subject);
        prop_assert_eq!(claims.iat, issued_at);
        prop_assert_eq!(claims.exp, issued_at + ttl_secs as i64);
    }

    #[test]
    fn test_single_byte_tamper_rejected(
        subject in "[a-z]{1,16}",
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let mut bytes = codec().issue(&subject).unwrap().into_bytes();

        let at = position.index(bytes.len());
        let mut swap = TOKEN_CHARS[replacement.index(TOKEN_CHARS.len())];
        if swap == bytes[at] {
            swap = if swap == b'A' { b'B' } else { b'A' };
        }
        bytes[at] = swap;
        let tampered = String::from_utf8(bytes).unwrap();

        let result = codec().decode(&tampered);
        prop_assert!(matches!(result, Err(TokenError::SignatureInvalid)), "got {:?}", result);
    }

    #[test]
    fn test_foreign_secret_rejected(subject in "[a-z]{1,16}") {
        let foreign = TokenCodec::from_secret(
            b"a-completely-different-secret-of-decent-length",
            Duration::from_secs(60),
        );
        let token = foreign.issue(&subject).unwrap();

        prop_assert!(codec().decode(&token).is_err());
    }
}
