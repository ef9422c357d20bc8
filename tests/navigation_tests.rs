//! # Navigation Codec Tests
//!
//! Property tests for the callback token codec.

use bookfinder::navigation::{decode, encode_detail, encode_page, Intent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn page_tokens_round_trip(query in ".*", page in any::<u32>()) {
        let token = encode_page(&query, page);
        prop_assert_eq!(decode(&token), Ok(Intent::ShowPage { query, page }));
    }

    #[test]
    fn page_tokens_with_delimiters_round_trip(
        parts in prop::collection::vec("[a-zA-Z ñ]{0,8}", 1..6),
        page in 1u32..1000,
    ) {
        let query = parts.join("_");
        let token = encode_page(&query, page);
        prop_assert_eq!(decode(&token), Ok(Intent::ShowPage { query, page }));
    }

    #[test]
    fn detail_tokens_round_trip(id in ".*") {
        let token = encode_detail(&id);
        prop_assert_eq!(decode(&token), Ok(Intent::ShowDetail { id }));
    }

    #[test]
    fn decode_never_panics(token in ".*") {
        let _ = decode(&token);
    }
}

#[test]
fn test_harry_potter_page_two() {
    let token = encode_page("Harry Potter", 2);
    assert_eq!(
        decode(&token),
        Ok(Intent::ShowPage {
            query: "Harry Potter".to_string(),
            page: 2
        })
    );
}

#[test]
fn test_intent_encode_matches_free_functions() {
    let intent = Intent::ShowDetail {
        id: "abc".to_string(),
    };
    assert_eq!(intent.encode(), encode_detail("abc"));
    let intent = Intent::ShowPage {
        query: "a_b".to_string(),
        page: 7,
    };
    assert_eq!(intent.encode(), "page_7_a_b");
}
