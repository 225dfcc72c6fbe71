//! Transition tests for the recommendation state machine.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{PriceBand, Translations};

fn seoul() -> Coordinates {
    Coordinates::new(37.4979, 127.0276).expect("valid coordinates")
}

fn busan() -> Coordinates {
    Coordinates::new(35.1796, 129.0756).expect("valid coordinates")
}

fn place(name: &str) -> Place {
    Place {
        id: format!("id-{name}"),
        name: name.to_owned(),
        category: "Korean".to_owned(),
        phone: Some("02-000-0000".to_owned()),
        location: seoul(),
        address: "1 Teheran-ro".to_owned(),
        distance_meters: 350.0,
        price_band: PriceBand::Normal,
        rating: Some(4.2),
        review_count: Some(12),
        photo_url: None,
        reason: "Hearty stew".to_owned(),
    }
}

fn location_ticket(effects: &[Effect]) -> RequestTicket {
    match effects {
        [Effect::RequestLocation { ticket, .. }] => *ticket,
        other => panic!("expected one location request, got {other:?}"),
    }
}

fn address_ticket(effects: &[Effect]) -> RequestTicket {
    match effects {
        [Effect::FetchAddress { ticket, .. }] => *ticket,
        other => panic!("expected one address request, got {other:?}"),
    }
}

fn recommendation(effects: &[Effect]) -> (RequestTicket, RecommendationRequest) {
    match effects {
        [Effect::FetchRecommendation { ticket, request }] => (*ticket, request.clone()),
        other => panic!("expected one recommendation request, got {other:?}"),
    }
}

/// State with a known position and resolved address.
#[fixture]
fn ready() -> AppState {
    let mut state = AppState::new(Language::English, Filters::default());
    let ticket = location_ticket(&state.start());
    let effects = state.handle_completion(Completion::Location {
        ticket,
        result: Ok(seoul()),
    });
    let ticket = address_ticket(&effects);
    state.handle_completion(Completion::Address {
        ticket,
        result: Ok("1 Teheran-ro, Gangnam-gu".to_owned()),
    });
    state
}

fn showing(mut state: AppState, name: &str) -> AppState {
    let (ticket, _) = recommendation(&state.handle_intent(Intent::Recommend));
    state.handle_completion(Completion::Recommendation {
        ticket,
        result: Ok(place(name)),
    });
    state
}

#[rstest]
fn start_requests_a_fresh_precise_fix() {
    let mut state = AppState::new(Language::Korean, Filters::default());

    let effects = state.start();

    assert_eq!(state.status(), AppStatus::AcquiringLocation);
    assert!(matches!(
        effects.as_slice(),
        [Effect::RequestLocation { options, .. }] if *options == LocationRequestOptions::default()
    ));
    assert!(state.start().is_empty(), "second start must not duplicate the request");
}

#[rstest]
fn consent_gates_the_first_request() {
    let mut state = AppState::awaiting_permission(Language::English, Filters::default());

    assert!(state.start().is_empty());
    assert!(matches!(state.view().screen, Screen::PermissionPrompt { .. }));

    let effects = state.handle_intent(Intent::GrantPermission);
    location_ticket(&effects);
    assert_eq!(state.status(), AppStatus::AcquiringLocation);
}

#[rstest]
fn location_success_enters_ready_and_fetches_address() {
    let mut state = AppState::new(Language::English, Filters::default());
    let ticket = location_ticket(&state.start());

    let effects = state.handle_completion(Completion::Location {
        ticket,
        result: Ok(seoul()),
    });

    assert_eq!(state.status(), AppStatus::Ready);
    assert_eq!(state.coordinates(), Some(seoul()));
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchAddress { coordinates, language: Language::English, .. }]
            if *coordinates == seoul()
    ));
    let Screen::Ready { location, .. } = state.view().screen else {
        panic!("expected ready screen");
    };
    assert_eq!(location.address, AddressPanel::Fetching("Fetching address..."));
}

#[rstest]
fn denied_location_fails_then_retry_recovers() {
    let mut state = AppState::new(Language::English, Filters::default());
    let ticket = location_ticket(&state.start());

    state.handle_completion(Completion::Location {
        ticket,
        result: Err(LocationError::permission_denied("user declined")),
    });

    assert_eq!(state.status(), AppStatus::Failed);
    let Screen::Failed { message, .. } = state.view().screen else {
        panic!("expected failure screen");
    };
    assert_eq!(
        message,
        "Could not get location information. Permission was denied."
    );

    let ticket = location_ticket(&state.handle_intent(Intent::Retry));
    assert_eq!(state.status(), AppStatus::AcquiringLocation);
    assert!(state.failure().is_none());
    state.handle_completion(Completion::Location {
        ticket,
        result: Ok(seoul()),
    });
    assert_eq!(state.status(), AppStatus::Ready);
}

#[rstest]
fn superseded_location_result_is_discarded(mut ready: AppState) {
    let first = location_ticket(&ready.handle_intent(Intent::Relocate));
    let second = location_ticket(&ready.handle_intent(Intent::Relocate));

    let effects = ready.handle_completion(Completion::Location {
        ticket: first,
        result: Ok(busan()),
    });
    assert!(effects.is_empty());
    assert_eq!(ready.coordinates(), Some(seoul()));

    ready.handle_completion(Completion::Location {
        ticket: second,
        result: Ok(busan()),
    });
    assert_eq!(ready.coordinates(), Some(busan()));
}

#[rstest]
fn relocation_failure_keeps_ready_and_shows_banner(mut ready: AppState) {
    let ticket = location_ticket(&ready.handle_intent(Intent::Relocate));
    let Screen::Ready { location, .. } = ready.view().screen else {
        panic!("expected ready screen");
    };
    assert!(location.relocating);
    assert_eq!(location.relocate_label, "Finding...");
    assert_eq!(location.address, AddressPanel::Relocating("Finding..."));

    ready.handle_completion(Completion::Location {
        ticket,
        result: Err(LocationError::timeout("10s elapsed")),
    });

    assert_eq!(ready.status(), AppStatus::Ready);
    assert_eq!(ready.coordinates(), Some(seoul()));
    let Screen::Ready { location, .. } = ready.view().screen else {
        panic!("expected ready screen");
    };
    assert_eq!(
        location.banner.as_deref(),
        Some("Could not get location information. The request timed out.")
    );
}

#[rstest]
fn relocation_discards_the_outstanding_address(mut ready: AppState) {
    let ticket = location_ticket(&ready.handle_intent(Intent::Relocate));
    let effects = ready.handle_completion(Completion::Location {
        ticket,
        result: Ok(busan()),
    });
    let outstanding = address_ticket(&effects);

    ready.handle_intent(Intent::Relocate);
    ready.handle_completion(Completion::Address {
        ticket: outstanding,
        result: Ok("Haeundae".to_owned()),
    });

    let Screen::Ready { location, .. } = ready.view().screen else {
        panic!("expected ready screen");
    };
    assert_eq!(location.address, AddressPanel::Relocating("Finding..."));
    assert!(location.banner.is_none());
}

#[rstest]
fn address_failure_shows_inline_error(mut ready: AppState) {
    let ticket = location_ticket(&ready.handle_intent(Intent::Relocate));
    let effects = ready.handle_completion(Completion::Location {
        ticket,
        result: Ok(busan()),
    });
    ready.handle_completion(Completion::Address {
        ticket: address_ticket(&effects),
        result: Err(AddressSourceError::empty()),
    });

    let Screen::Ready { location, .. } = ready.view().screen else {
        panic!("expected ready screen");
    };
    assert_eq!(location.banner.as_deref(), Some("Could not fetch address."));
    assert_eq!(location.address, AddressPanel::Unknown);
}

#[rstest]
fn filters_flow_into_the_request(mut ready: AppState) {
    ready.handle_intent(Intent::SetPrice(PricePref::Cheap));
    ready.handle_intent(Intent::SetDistance(DistancePref::Any));

    let (_, request) = recommendation(&ready.handle_intent(Intent::Recommend));

    assert_eq!(request.filters.price, PricePref::Cheap);
    assert_eq!(request.filters.distance, DistancePref::Any);
    assert_eq!(request.coordinates, seoul());
    assert!(request.exclude_names.is_empty());
    assert_eq!(ready.status(), AppStatus::Recommending);
}

#[rstest]
fn filters_are_frozen_outside_ready(ready: AppState) {
    let mut state = showing(ready, "Stew House");

    let effects = state.handle_intent(Intent::SetPrice(PricePref::Expensive));

    assert!(effects.is_empty());
    assert_eq!(state.filters().price, PricePref::Normal);
}

#[rstest]
fn result_is_recorded_and_reroll_excludes_it(ready: AppState) {
    let mut state = showing(ready, "Stew House");
    assert_eq!(state.status(), AppStatus::ShowingResult);
    assert_eq!(state.recent_places().len(), 1);

    let (_, request) = recommendation(&state.handle_intent(Intent::Reroll));

    assert_eq!(request.exclude_names, vec!["Stew House".to_owned()]);
    assert_eq!(state.status(), AppStatus::Recommending);
}

#[rstest]
fn result_card_renders_localised_details(ready: AppState) {
    let state = showing(ready, "Stew House");

    let Screen::Result(card) = state.view().screen else {
        panic!("expected result screen");
    };
    assert_eq!(card.name, "Stew House");
    assert_eq!(card.walk_distance, "Approx. 350m / 5 min walk");
    assert_eq!(card.rating.as_deref(), Some("4.2 (12)"));
    assert_eq!(card.photo_url, crate::domain::PLACEHOLDER_PHOTO_URL);
}

#[rstest]
#[case(RecommendationSourceError::model("blocked"), "The AI might be busy")]
#[case(RecommendationSourceError::unexpected("worker stopped"), "worker stopped")]
fn reroll_failure_shows_error_and_home_returns(
    ready: AppState,
    #[case] error: RecommendationSourceError,
    #[case] expected: &str,
) {
    let mut state = showing(ready, "Stew House");
    let (ticket, _) = recommendation(&state.handle_intent(Intent::Reroll));

    state.handle_completion(Completion::Recommendation {
        ticket,
        result: Err(error),
    });

    assert_eq!(state.status(), AppStatus::Failed);
    let Screen::Failed { message, .. } = state.view().screen else {
        panic!("expected failure screen");
    };
    assert!(message.contains(expected), "{message}");

    state.handle_intent(Intent::GoHome);
    assert_eq!(state.status(), AppStatus::Ready);
    assert!(state.failure().is_none());
    assert_eq!(state.recent_places().len(), 1);
}

#[rstest]
fn directions_open_only_for_a_result(mut ready: AppState) {
    assert!(ready.handle_intent(Intent::OpenDirections).is_empty());

    let mut state = showing(ready, "Stew House");
    let effects = state.handle_intent(Intent::OpenDirections);

    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://www.google.com/maps/dir/?api=1&destination=37.4979,127.0276".to_owned()
        }]
    );
}

#[rstest]
#[case(Intent::Retry)]
#[case(Intent::GoHome)]
#[case(Intent::Reroll)]
#[case(Intent::GrantPermission)]
#[case(Intent::OpenDirections)]
fn unaccepted_intents_leave_state_untouched(mut ready: AppState, #[case] intent: Intent) {
    let before = ready.clone();

    let effects = ready.handle_intent(intent);

    assert!(effects.is_empty());
    assert_eq!(ready, before);
}

#[rstest]
fn toggling_language_twice_restores_every_string(ready: AppState) {
    let mut state = showing(ready, "Stew House");
    let before = state.view();

    state.handle_intent(Intent::ToggleLanguage);
    let toggled = state.view();
    state.handle_intent(Intent::ToggleLanguage);

    assert_eq!(toggled.language, Language::Korean);
    assert_ne!(toggled, before);
    assert_eq!(state.view(), before);
}

#[rstest]
fn error_text_follows_a_language_toggle() {
    let mut state = AppState::new(Language::English, Filters::default());
    let ticket = location_ticket(&state.start());
    state.handle_completion(Completion::Location {
        ticket,
        result: Err(LocationError::position_unavailable("no fix")),
    });

    state.handle_intent(Intent::ToggleLanguage);

    let Screen::Failed { message, .. } = state.view().screen else {
        panic!("expected failure screen");
    };
    let texts = Translations::for_language(Language::Korean);
    assert!(message.starts_with(texts.app.geolocation_errors.prefix));
}

#[rstest]
fn recommending_without_a_position_fails() {
    let mut state = AppState::new(Language::English, Filters::default());
    let ticket = location_ticket(&state.start());
    state.handle_completion(Completion::Location {
        ticket,
        result: Err(LocationError::timeout("no fix in time")),
    });
    assert_eq!(state.status(), AppStatus::Failed);

    assert!(state.handle_intent(Intent::GoHome).is_empty());
    assert_eq!(state.status(), AppStatus::Ready);
    assert_eq!(state.coordinates(), None);

    let effects = state.handle_intent(Intent::Recommend);

    assert!(effects.is_empty());
    assert_eq!(state.status(), AppStatus::Failed);
    assert_eq!(state.failure(), Some(&FailureMessage::MissingCoordinates));
    let Screen::Failed { message, .. } = state.view().screen else {
        panic!("expected failure screen");
    };
    assert_eq!(message, "Cannot recommend without knowing your current location.");
}

#[rstest]
fn stale_recommendation_after_reroll_is_discarded(ready: AppState) {
    let mut state = showing(ready, "Stew House");
    let (first, _) = recommendation(&state.handle_intent(Intent::Reroll));
    state.handle_completion(Completion::Recommendation {
        ticket: first,
        result: Ok(place("Noodle Bar")),
    });
    let (second, _) = recommendation(&state.handle_intent(Intent::Reroll));

    state.handle_completion(Completion::Recommendation {
        ticket: first,
        result: Ok(place("Late Arrival")),
    });
    assert_eq!(state.status(), AppStatus::Recommending);

    state.handle_completion(Completion::Recommendation {
        ticket: second,
        result: Ok(place("Dumpling Shop")),
    });
    assert_eq!(
        state.current_place().map(|p| p.name.as_str()),
        Some("Dumpling Shop")
    );
    assert_eq!(
        state.recent_places().exclusion_names(),
        vec!["Dumpling Shop", "Noodle Bar", "Stew House"]
    );
}
