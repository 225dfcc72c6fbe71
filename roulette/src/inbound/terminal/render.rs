//! Plain-text rendering of an [`AppView`].

use crate::domain::{AppView, FilterPanel, LocationPanel, PlaceCard, Screen};

/// Render one frame. `loader_phrase` replaces the body of loading screens.
#[must_use]
pub fn render(view: &AppView, loader_phrase: Option<&str>) -> String {
    let mut lines = vec![
        view.title.to_owned(),
        view.subtitle.to_owned(),
        format!("[lang] {}", view.language_toggle),
        String::new(),
    ];
    match &view.screen {
        Screen::PermissionPrompt {
            title,
            description,
            button,
        } => {
            lines.push((*title).to_owned());
            lines.push((*description).to_owned());
            lines.push(format!("[grant] {button}"));
        }
        Screen::Loading { phrases } => {
            let phrase = loader_phrase.or_else(|| phrases.first().copied());
            lines.push(format!("... {}", phrase.unwrap_or_default()));
        }
        Screen::Ready {
            location,
            filters,
            recommend_button,
        } => {
            push_location(&mut lines, location);
            lines.push(String::new());
            push_filters(&mut lines, filters);
            lines.push(String::new());
            lines.push(format!("[recommend] {recommend_button}"));
        }
        Screen::Result(card) => push_card(&mut lines, card),
        Screen::Failed {
            title,
            message,
            retry,
            home,
        } => {
            lines.push(format!("!! {title}"));
            lines.push(message.clone());
            lines.push(format!("[retry] {retry}   [home] {home}"));
        }
        Screen::Empty => {}
    }
    if view.recent_count > 0 {
        lines.push(String::new());
        lines.push(format!("({} recent)", view.recent_count));
    }
    lines.join("\n")
}

fn push_location(lines: &mut Vec<String>, location: &LocationPanel) {
    let coordinates = location
        .coordinates
        .map(|coordinates| format!("  ({coordinates})"))
        .unwrap_or_default();
    lines.push(format!(
        "{}: {}{coordinates}",
        location.heading,
        location.address.text()
    ));
    lines.push(format!("[relocate] {}", location.relocate_label));
    if let Some(banner) = &location.banner {
        lines.push(format!("! {banner}"));
    }
}

fn push_filters(lines: &mut Vec<String>, filters: &FilterPanel) {
    let options = |pairs: Vec<String>| pairs.join("  ");
    lines.push(format!(
        "[price] {}: {}",
        filters.price_heading,
        options(
            filters
                .price_options
                .iter()
                .map(|(pref, label)| mark(*pref == filters.selected.price, pref.as_str(), label))
                .collect()
        )
    ));
    lines.push(format!(
        "[distance] {}: {}",
        filters.distance_heading,
        options(
            filters
                .distance_options
                .iter()
                .map(|(pref, label)| {
                    mark(*pref == filters.selected.distance, pref.as_str(), label)
                })
                .collect()
        )
    ));
}

fn mark(selected: bool, key: &str, label: &str) -> String {
    let bullet = if selected { "(*)" } else { "( )" };
    format!("{bullet} {label} <{key}>")
}

fn push_card(lines: &mut Vec<String>, card: &PlaceCard) {
    lines.push(format!("{} / {}", card.name, card.category));
    lines.push(format!("\"{}\"", card.reason));
    lines.push(card.address.clone());
    let mut facts = vec![card.walk_distance.clone(), card.price_label.to_owned()];
    if let Some(rating) = &card.rating {
        facts.push(format!("* {rating}"));
    }
    lines.push(facts.join(" | "));
    if let Some(phone) = &card.phone {
        lines.push(format!("tel {phone}"));
    }
    lines.push(format!("photo {}", card.photo_url));
    lines.push(format!(
        "[home] {}   [reroll] {}   [directions] {}",
        card.home_label, card.reroll_label, card.directions_label
    ));
}
