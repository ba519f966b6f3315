//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Bounded inputs are drawn from small alphabets that contain every
//! delimiter the parsers branch on.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Authority, PortState, Query, Uri};

/// Characters that drive the scanners, plus one ordinary letter and digit.
const SCAN_CHARS: &[u8] = b"a1:@[]/?#&=%+";

/// Characters for decoded text: ordinary, reserved and the escape introducer.
const TEXT_CHARS: &[u8] = b"a :/?#&=%+";

fn arbitrary_from(alphabet: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            alphabet[idx % alphabet.len()] as char
        })
        .collect()
}

/// Proof: port parsing never panics and only yields a value for digits
#[kani::proof]
#[kani::unwind(8)]
fn proof_port_parse_total() {
    let digits = arbitrary_from(b"0123456789x", 6);
    match PortState::parse(&digits) {
        PortState::Value(_) => assert!(digits.bytes().all(|b| b.is_ascii_digit())),
        PortState::None => unreachable!("parse never reports a missing port"),
        PortState::Invalid => {}
    }
}

/// Proof: authority parsing never panics
#[kani::proof]
#[kani::unwind(8)]
fn proof_authority_parse_total() {
    let input = arbitrary_from(SCAN_CHARS, 6);
    let authority = Authority::parse(&input);
    let _ = authority.is_valid();
    let _ = authority.serialise();
}

/// Proof: URI parsing never panics and validity agrees with validate()
#[kani::proof]
#[kani::unwind(8)]
fn proof_uri_parse_total() {
    let input = arbitrary_from(SCAN_CHARS, 6);
    let uri = Uri::parse(&input);
    assert_eq!(uri.is_valid(), uri.validate().is_ok());
}

/// Proof: a query parameter survives serialisation
#[kani::proof]
#[kani::unwind(6)]
fn proof_query_param_roundtrip() {
    let key = arbitrary_from(TEXT_CHARS, 3);
    let value = arbitrary_from(TEXT_CHARS, 3);
    kani::assume(!key.is_empty());

    let mut query = Query::new();
    query.push_pair(key, value);
    assert_eq!(Query::parse(&query.serialise()), query);
}
