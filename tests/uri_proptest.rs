//! Property-based tests for the codec, the query model and URI round trips.
//!
//! Components are generated as decoded text, so they freely contain
//! delimiters and `%`; the properties check that serialisation escapes them
//! and that parsing gets the same components back.

use proptest::prelude::*;

use omw_uri::{Authority, Path, PortState, Query, QueryParameter, Uri, UriBuilder, percent};

/// Strategies for generating URI components.
mod strategies {
    use super::*;

    /// Scheme: a letter followed by letters, digits, `+`, `.` or `-`
    pub fn scheme() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9+.-]{0,8}"
    }

    /// Decoded registered-name host, including characters that need escaping
    pub fn reg_name() -> impl Strategy<Value = String> {
        "[a-z0-9 .%!-]{1,12}"
    }

    /// Bracketed IPv6 literal (full form)
    pub fn ipv6() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            let body = groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":");
            format!("[{body}]")
        })
    }

    pub fn host() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => reg_name(),
            1 => ipv6(),
        ]
    }

    /// Optional user with optional password; the user is never empty
    pub fn userinfo() -> impl Strategy<Value = Option<(String, Option<String>)>> {
        let text = "[a-zA-Z0-9 :@%]{1,8}";
        prop::option::of((text, prop::option::of(text)))
    }

    /// Decoded path segment, including `/`, `?`, `#` and `%`
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9 /?#%:@]{0,6}"
    }

    /// Decoded query text with the parameter delimiters and `+` mixed in
    pub fn query_text() -> impl Strategy<Value = String> {
        "[a-z0-9 &=+%?/]{0,6}"
    }

    pub fn param() -> impl Strategy<Value = QueryParameter> {
        let key = "[a-z0-9 &=+%]{1,5}";
        prop_oneof![
            (key, query_text()).prop_map(|(k, v)| QueryParameter::new(k, v)),
            key.prop_map(QueryParameter::flag),
        ]
    }

    pub fn params() -> impl Strategy<Value = Vec<QueryParameter>> {
        prop::collection::vec(param(), 0..=5)
    }

    pub type Permuted = (Vec<QueryParameter>, Vec<QueryParameter>);

    /// Parameters paired with a shuffled copy of themselves
    pub fn permuted_params() -> impl Strategy<Value = Permuted> {
        params().prop_flat_map(|p| {
            let shuffled = Just(p.clone()).prop_shuffle();
            (Just(p), shuffled)
        })
    }

    /// Non-empty decoded fragment
    pub fn fragment() -> impl Strategy<Value = String> {
        "[a-z0-9 #?%/]{1,8}"
    }

    /// A well-formed URI assembled from decoded components
    pub fn uri() -> impl Strategy<Value = Uri> {
        (
            scheme(),
            userinfo(),
            host(),
            prop::option::of(any::<u16>()),
            prop::collection::vec(segment(), 0..=4),
            params(),
            prop::option::of(fragment()),
        )
            .prop_map(|(scheme, userinfo, host, port, segments, params, fragment)| {
                let mut builder = UriBuilder::new().scheme(scheme).host(host);
                if let Some((user, pass)) = userinfo {
                    builder = builder.user(user);
                    if let Some(pass) = pass {
                        builder = builder.pass(pass);
                    }
                }
                if let Some(port) = port {
                    builder = builder.port(port);
                }
                if !segments.is_empty() {
                    builder = builder.path(Path::from_segments(true, segments));
                }
                builder = builder.query(params.into_iter().collect());
                if let Some(fragment) = fragment {
                    builder = builder.fragment(fragment);
                }
                builder.build().unwrap()
            })
    }
}

mod codec_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn decode_inverts_every_encoder(s in ".*") {
            prop_assert_eq!(percent::decode(&percent::encode(&s)), s.clone());
            prop_assert_eq!(percent::decode(&percent::encode_authority(&s)), s.clone());
            prop_assert_eq!(percent::decode(&percent::encode_path_segment(&s)), s.clone());
            prop_assert_eq!(percent::decode(&percent::encode_query_field(&s)), s.clone());
            prop_assert_eq!(percent::decode(&percent::encode_fragment(&s)), s);
        }

        #[test]
        fn decode_bytes_matches_utf8(s in ".*") {
            prop_assert_eq!(percent::decode_bytes(&percent::encode(&s)), s.into_bytes());
        }

        #[test]
        fn double_encoding_escapes_percent(s in ".*") {
            let once = percent::encode(&s);
            let twice = percent::encode(&once);
            prop_assert_eq!(twice.matches("%25").count(), once.matches('%').count());
            prop_assert_eq!(percent::decode(&twice), once);
        }

        #[test]
        fn encoded_output_is_ascii(s in ".*") {
            prop_assert!(percent::encode_path(&s).is_ascii());
            prop_assert!(percent::encode_query(&s).is_ascii());
        }
    }
}

mod query_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn query_survives_serialisation(params in params()) {
            let query: Query = params.into_iter().collect();
            prop_assert_eq!(Query::parse(&query.serialise()), query);
        }

        #[test]
        fn permutation_is_equivalent((params, shuffled) in permuted_params()) {
            let original: Query = params.iter().cloned().collect();
            let permuted: Query = shuffled.iter().cloned().collect();

            prop_assert!(original.equivalent(&permuted));
            prop_assert_eq!(original.equals(&permuted), params == shuffled);
        }

        #[test]
        fn scheme_decides_query_order((params, shuffled) in permuted_params()) {
            let original: Query = params.iter().cloned().collect();
            let permuted: Query = shuffled.iter().cloned().collect();

            let mut http_a = Uri::parse("http://h/p");
            let mut http_b = http_a.clone();
            http_a.set_query(original.clone());
            http_b.set_query(permuted.clone());
            prop_assert!(http_a.equals(&http_b));

            let mut ftp_a = Uri::parse("ftp://h/p");
            let mut ftp_b = ftp_a.clone();
            ftp_a.set_query(original);
            ftp_b.set_query(permuted);
            prop_assert_eq!(ftp_a.equals(&ftp_b), params == shuffled);
        }
    }
}

mod authority_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn port_range(n in 0u32..=200_000) {
            let authority = Authority::parse(&format!("host:{n}"));
            let in_range = n <= u32::from(u16::MAX);

            prop_assert_eq!(authority.host(), "host");
            prop_assert_eq!(authority.is_valid(), in_range);
            prop_assert_eq!(authority.port().is_some(), in_range);
            if !in_range {
                prop_assert_eq!(authority.port_state(), PortState::Invalid);
            }

            let uri = Uri::parse(&format!("http://host:{n}/"));
            prop_assert_eq!(uri.is_valid(), in_range);
        }

        #[test]
        fn non_digit_port_is_invalid(port in "[0-9]{0,3}[a-z+-][0-9a-z]{0,3}") {
            let authority = Authority::parse(&format!("host:{port}"));
            prop_assert_eq!(authority.port_state(), PortState::Invalid);
            prop_assert!(!authority.is_valid());
        }
    }
}

mod uri_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_uri_roundtrip(uri in uri()) {
            let serialised = uri.serialise();
            let reparsed = Uri::parse(&serialised);

            prop_assert!(reparsed.is_valid(), "not valid: {}", serialised);
            prop_assert!(reparsed.equals(&uri), "not equal after reparse: {}", serialised);
            prop_assert_eq!(reparsed.serialise(), serialised);
        }

        #[test]
        fn strict_parse_accepts_serialised(uri in uri()) {
            let parsed: Uri = uri.serialise().parse().unwrap();
            prop_assert_eq!(parsed, uri);
        }

        #[test]
        fn lenient_parse_never_panics(input in ".*") {
            let uri = Uri::parse(&input);
            prop_assert_eq!(uri.is_valid(), uri.validate().is_ok());
            let _ = uri.serialise();
        }

        #[test]
        fn scheme_case_is_ignored(uri in uri()) {
            let serialised = uri.serialise();
            let (scheme, rest) = serialised.split_once(':').unwrap();
            let upper = Uri::parse(&format!("{}:{rest}", scheme.to_ascii_uppercase()));
            prop_assert!(upper.equals(&uri));
        }
    }
}
