//! # Conversation Tests
//!
//! End-to-end flows from chat events to screens against a mock upstream.

mod common;

use anyhow::Result;
use bookfinder::conversation::{handle_event, ChatEvent, ConversationState, Screen};
use bookfinder::navigation::{decode, DecodeError, Intent};
use bookfinder::presenter::{results_view, ButtonAction};
use common::{detail_page, listing_page, mock_catalog, mock_detail, mock_search, numbered_entries};
use mockito::Server;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_text_then_next_page_then_detail() -> Result<()> {
    let mut server = Server::new_async().await;
    let _page_one = mock_search(
        &mut server,
        "Harry Potter",
        1,
        200,
        &listing_page(&numbered_entries(10), true),
    )
    .await;
    let _page_two = mock_search(
        &mut server,
        "Harry Potter",
        2,
        200,
        &listing_page(&numbered_entries(3), false),
    )
    .await;
    let catalog = mock_catalog(&server);

    // Idle -> Searching -> ResultsShown
    let screen = handle_event(&catalog, ChatEvent::Text("Harry Potter".to_string())).await;
    let Screen::Results { query, page, result } = &screen else {
        panic!("Expected results, got {screen:?}");
    };
    assert_eq!((query.as_str(), *page), ("Harry Potter", 1));
    assert_eq!(result.items.len(), 10);
    assert!(result.has_next_page);

    // The "next" button carries the query and the following page
    let view = results_view(query, *page, result, Some("en"));
    assert_eq!(view.navigation.len(), 1);
    let ButtonAction::Callback(next_token) = &view.navigation[0].action else {
        panic!("Navigation buttons use callback data");
    };
    assert_eq!(
        decode(next_token)?,
        Intent::ShowPage {
            query: "Harry Potter".to_string(),
            page: 2
        }
    );

    // ResultsShown -> ResultsShown
    let previous_state = screen.state();
    let screen = handle_event(&catalog, ChatEvent::Navigation(next_token.clone())).await;
    assert!(previous_state.can_transition_to(&screen.state()));
    let Screen::Results { page, result, .. } = &screen else {
        panic!("Expected results, got {screen:?}");
    };
    assert_eq!(*page, 2);
    assert_eq!(result.items.len(), 3);
    assert!(!result.has_next_page);

    // ResultsShown -> DetailShown
    let id = result.items[1].id.clone();
    let _detail = mock_detail(
        &mut server,
        &id,
        200,
        &detail_page(
            Some("Harry Potter 1"),
            None,
            Some("Second year."),
            &[("https://downloads.annas-archive.org/x.epub", "EPUB (1MB)")],
        ),
    )
    .await;
    let view = results_view("Harry Potter", 2, result, None);
    let ButtonAction::Callback(detail_token) = &view.results[1].action else {
        panic!("Result buttons use callback data");
    };

    let previous_state = screen.state();
    let screen = handle_event(&catalog, ChatEvent::Navigation(detail_token.clone())).await;
    assert!(previous_state.can_transition_to(&screen.state()));
    assert_eq!(screen.state(), ConversationState::DetailShown { id: id.clone() });
    let Screen::Detail { detail, .. } = screen else {
        panic!("Expected detail");
    };
    assert_eq!(detail.description, "Second year.");
    Ok(())
}

#[tokio::test]
async fn test_failed_search_shows_no_results() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, "dune", 1, 503, "").await;
    let catalog = mock_catalog(&server);

    let screen = handle_event(&catalog, ChatEvent::Text("dune".to_string())).await;
    assert_eq!(
        screen,
        Screen::NoResults {
            query: "dune".to_string(),
            page: 1
        }
    );
    assert_eq!(screen.state(), ConversationState::Idle);
    Ok(())
}

#[tokio::test]
async fn test_failed_lookup_shows_detail_unavailable() -> Result<()> {
    let mut server = Server::new_async().await;
    let _mock = mock_detail(&mut server, "abc123", 500, "").await;
    let catalog = mock_catalog(&server);

    let screen = handle_event(&catalog, ChatEvent::Navigation("detail_abc123".to_string())).await;
    assert_eq!(
        screen,
        Screen::DetailUnavailable {
            id: "abc123".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_undecodable_token() -> Result<()> {
    let server = Server::new_async().await;
    let catalog = mock_catalog(&server);

    let screen = handle_event(&catalog, ChatEvent::Navigation("edit_3".to_string())).await;
    assert_eq!(
        screen,
        Screen::InvalidAction(DecodeError::UnknownKind("edit".to_string()))
    );
    Ok(())
}
