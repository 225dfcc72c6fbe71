//! End-to-end flows through the orchestrator with scripted ports.
//!
//! The Gemini adapters run for real against a stub generator, so these tests
//! cover prompt building, answer parsing, and rendering together.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

#[path = "support/doubles.rs"]
mod doubles;

use std::sync::Arc;

use doubles::{
    NumberedRecommendations, RecordingLinks, ScriptedLocation, StubGenerator, coordinates,
};
use roulette::domain::ports::{FixtureAddressSource, LocationError};
use roulette::domain::{
    AddressPanel, AppState, AppStatus, AppView, DistancePref, Filters, Intent, Language,
    LocationPanel, Orchestrator, PLACEHOLDER_PHOTO_URL, PlaceCard, PricePref, RoulettePorts,
    Screen,
};
use roulette::outbound::gemini::{GeminiAddressSource, GeminiRecommendationSource, GenerationError};

const TEST_BBQ: &str = r#"Here you go:
```json
{
  "id": "test-bbq",
  "name": "Test BBQ",
  "category": "Korean BBQ",
  "location": {"latitude": 37.501, "longitude": 127.031},
  "address": "10 Teheran-ro, Gangnam-gu",
  "distanceMeters": 450,
  "priceBand": "normal",
  "rating": 4.4,
  "reviewCount": 87,
  "reason": "Charcoal grill two blocks away."
}
```"#;

fn gemini_ports(
    location: &Arc<ScriptedLocation>,
    generator: &Arc<StubGenerator>,
    links: &Arc<RecordingLinks>,
) -> RoulettePorts {
    RoulettePorts::new(
        Arc::<ScriptedLocation>::clone(location),
        Arc::new(GeminiRecommendationSource::new(Arc::<StubGenerator>::clone(generator))),
        Arc::new(GeminiAddressSource::new(Arc::<StubGenerator>::clone(generator))),
        Arc::<RecordingLinks>::clone(links),
    )
}

fn numbered_ports(
    location: &Arc<ScriptedLocation>,
    recommendations: &Arc<NumberedRecommendations>,
) -> RoulettePorts {
    RoulettePorts::new(
        Arc::<ScriptedLocation>::clone(location),
        Arc::<NumberedRecommendations>::clone(recommendations),
        Arc::new(FixtureAddressSource),
        Arc::new(RecordingLinks::default()),
    )
}

fn english(ports: RoulettePorts) -> Orchestrator {
    Orchestrator::new(AppState::new(Language::English, Filters::default()), ports)
}

fn location_panel(view: &AppView) -> &LocationPanel {
    match &view.screen {
        Screen::Ready { location, .. } => location,
        other => panic!("expected the ready screen, got {other:?}"),
    }
}

fn result_card(view: &AppView) -> &PlaceCard {
    match &view.screen {
        Screen::Result(card) => card,
        other => panic!("expected a result card, got {other:?}"),
    }
}

fn failure_message(view: &AppView) -> &str {
    match &view.screen {
        Screen::Failed { message, .. } => message,
        other => panic!("expected the failure screen, got {other:?}"),
    }
}

#[tokio::test]
async fn model_answer_becomes_the_result_card() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.50, 127.03)));
    let generator = Arc::new(StubGenerator::new(" 12 Teheran-ro, Gangnam-gu \n"));
    generator.push_answer(Ok(TEST_BBQ.to_owned()));
    let links = Arc::new(RecordingLinks::default());
    let mut app = english(gemini_ports(&location, &generator, &links));

    app.start();
    app.settle().await;
    assert_eq!(app.state().status(), AppStatus::Ready);
    assert_eq!(
        location_panel(&app.view()).address,
        AddressPanel::Resolved("12 Teheran-ro, Gangnam-gu".to_owned())
    );

    app.dispatch(Intent::Recommend);
    app.settle().await;

    assert_eq!(app.state().status(), AppStatus::ShowingResult);
    let view = app.view();
    let card = result_card(&view);
    assert_eq!(card.name, "Test BBQ");
    assert_eq!(card.photo_url, PLACEHOLDER_PHOTO_URL);
    assert_eq!(card.walk_distance, "Approx. 450m / 6 min walk");
    assert_eq!(card.rating.as_deref(), Some("4.4 (87)"));
    assert_eq!(view.recent_count, 1);

    app.dispatch(Intent::OpenDirections);
    assert_eq!(
        links.urls(),
        vec!["https://www.google.com/maps/dir/?api=1&destination=37.501,127.031".to_owned()]
    );
}

#[tokio::test]
async fn denied_permission_fails_until_retried() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Err(LocationError::permission_denied("user dismissed the prompt")));
    location.push(Ok(coordinates(37.4979, 127.0276)));
    let recommendations = Arc::new(NumberedRecommendations::default());
    let mut app = english(numbered_ports(&location, &recommendations));

    app.start();
    app.settle().await;
    assert_eq!(app.state().status(), AppStatus::Failed);
    assert_eq!(
        failure_message(&app.view()),
        "Could not get location information. Permission was denied."
    );

    app.dispatch(Intent::Retry);
    app.settle().await;

    assert_eq!(app.state().status(), AppStatus::Ready);
    assert_eq!(
        location_panel(&app.view()).address,
        AddressPanel::Resolved("near 37.4979,127.0276".to_owned())
    );
}

#[tokio::test]
async fn superseded_location_result_is_discarded() {
    let location = Arc::new(ScriptedLocation::default());
    let release_first = location.push_gated(Ok(coordinates(35.1796, 129.0756)));
    location.push(Ok(coordinates(37.4979, 127.0276)));
    let recommendations = Arc::new(NumberedRecommendations::default());
    let mut app = english(numbered_ports(&location, &recommendations));

    app.start();
    app.dispatch(Intent::Relocate);
    assert_eq!(app.in_flight(), 2);
    assert!(app.settle_next().await);
    release_first.send(()).expect("first request still waiting");
    app.settle().await;

    assert_eq!(app.state().coordinates(), Some(coordinates(37.4979, 127.0276)));
    assert_eq!(app.state().status(), AppStatus::Ready);
    assert_eq!(
        location_panel(&app.view()).address,
        AddressPanel::Resolved("near 37.4979,127.0276".to_owned())
    );
}

#[tokio::test]
async fn history_keeps_the_ten_most_recent_places() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.4979, 127.0276)));
    let recommendations = Arc::new(NumberedRecommendations::default());
    let mut app = english(numbered_ports(&location, &recommendations));
    app.start();
    app.settle().await;

    app.dispatch(Intent::Recommend);
    app.settle().await;
    for _ in 0..11 {
        app.dispatch(Intent::Reroll);
        app.settle().await;
    }

    let requests = recommendations.requests();
    assert_eq!(requests.len(), 12);
    assert!(requests[0].exclude_names.is_empty());
    let last = &requests[11].exclude_names;
    assert_eq!(last.len(), 10);
    assert_eq!(last.first().map(String::as_str), Some("Place 11"));
    assert!(!last.iter().any(|name| name == "Place 1"));

    let recent: Vec<_> = app
        .state()
        .recent_places()
        .iter()
        .map(|place| place.name.clone())
        .collect();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent.first().map(String::as_str), Some("Place 12"));
    assert_eq!(recent.last().map(String::as_str), Some("Place 3"));
}

#[tokio::test]
async fn chosen_filters_shape_the_prompt() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.50, 127.03)));
    let generator = Arc::new(StubGenerator::new("12 Teheran-ro"));
    generator.push_answer(Ok(TEST_BBQ.to_owned()));
    let links = Arc::new(RecordingLinks::default());
    let mut app = english(gemini_ports(&location, &generator, &links));
    app.start();
    app.settle().await;

    app.dispatch(Intent::SetPrice(PricePref::Cheap));
    app.dispatch(Intent::SetDistance(DistancePref::Near));
    app.dispatch(Intent::Recommend);
    app.settle().await;

    let prompts = generator.recommendation_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("an affordable, budget-friendly place."));
    assert!(prompts[0].contains("very close, preferably within a 15-minute walk"));
    assert!(prompts[0].contains("nothing to exclude"));
    assert_eq!(app.state().status(), AppStatus::ShowingResult);
}

#[tokio::test]
async fn failed_reroll_shows_the_busy_message() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.50, 127.03)));
    let generator = Arc::new(StubGenerator::new("12 Teheran-ro"));
    generator.push_answer(Ok(TEST_BBQ.to_owned()));
    generator.push_answer(Err(GenerationError::Status {
        status: 503,
        body: "overloaded".to_owned(),
    }));
    let links = Arc::new(RecordingLinks::default());
    let mut app = english(gemini_ports(&location, &generator, &links));
    app.start();
    app.settle().await;
    app.dispatch(Intent::Recommend);
    app.settle().await;

    app.dispatch(Intent::Reroll);
    app.settle().await;

    assert_eq!(app.state().status(), AppStatus::Failed);
    assert_eq!(
        failure_message(&app.view()),
        "Failed to get a recommendation. The AI might be busy, please try again."
    );
    assert!(
        generator.recommendation_prompts()[1].contains("Test BBQ"),
        "reroll excludes the shown place"
    );

    app.dispatch(Intent::GoHome);
    assert_eq!(app.state().status(), AppStatus::Ready);
    assert_eq!(app.view().recent_count, 1);
}

#[tokio::test]
async fn blank_address_answer_shows_the_banner() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.50, 127.03)));
    let generator = Arc::new(StubGenerator::new("   "));
    let links = Arc::new(RecordingLinks::default());
    let mut app = english(gemini_ports(&location, &generator, &links));

    app.start();
    app.settle().await;

    let view = app.view();
    let panel = location_panel(&view);
    assert_eq!(panel.address, AddressPanel::Unknown);
    assert_eq!(panel.banner.as_deref(), Some("Could not fetch address."));
}

#[tokio::test]
async fn toggling_language_twice_restores_the_view() {
    let location = Arc::new(ScriptedLocation::default());
    location.push(Ok(coordinates(37.4979, 127.0276)));
    let recommendations = Arc::new(NumberedRecommendations::default());
    let mut app = english(numbered_ports(&location, &recommendations));
    app.start();
    app.settle().await;
    let before = app.view();

    app.dispatch(Intent::ToggleLanguage);
    assert_eq!(app.state().language(), Language::Korean);
    assert_ne!(app.view(), before);
    app.dispatch(Intent::ToggleLanguage);

    assert_eq!(app.view(), before);
    assert_eq!(app.in_flight(), 0);
}
