use toptracks::ui::{Glyph, PlayerView, PreviewDeck, PreviewEffect, PreviewState};

#[test]
fn test_first_click_starts_playback() {
    let mut deck = PreviewDeck::new();
    assert_eq!(deck.state(), &PreviewState::Idle);

    let effects = deck.toggle(0, "https://p.test/1.mp3");
    assert_eq!(
        effects,
        vec![
            PreviewEffect::Play("https://p.test/1.mp3".to_string()),
            PreviewEffect::Glyph(0, Glyph::Pause),
        ]
    );
    assert_eq!(
        deck.state(),
        &PreviewState::Playing {
            button: 0,
            url: "https://p.test/1.mp3".to_string()
        }
    );
}

#[test]
fn test_switching_tracks_pauses_previous_before_starting_next() {
    let mut deck = PreviewDeck::new();
    deck.toggle(0, "https://p.test/1.mp3");

    let effects = deck.toggle(1, "https://p.test/2.mp3");
    assert_eq!(
        effects,
        vec![
            PreviewEffect::Pause("https://p.test/1.mp3".to_string()),
            PreviewEffect::Glyph(0, Glyph::Play),
            PreviewEffect::Play("https://p.test/2.mp3".to_string()),
            PreviewEffect::Glyph(1, Glyph::Pause),
        ]
    );
}

#[test]
fn test_switching_from_paused_track_resets_its_button() {
    let mut deck = PreviewDeck::new();
    deck.toggle(0, "https://p.test/1.mp3");
    deck.toggle(0, "https://p.test/1.mp3");

    let effects = deck.toggle(1, "https://p.test/2.mp3");
    assert_eq!(effects[0], PreviewEffect::Pause("https://p.test/1.mp3".to_string()));
    assert_eq!(effects[1], PreviewEffect::Glyph(0, Glyph::Play));
    assert_eq!(effects[2], PreviewEffect::Play("https://p.test/2.mp3".to_string()));
}

#[test]
fn test_view_shows_one_pause_glyph() {
    let mut deck = PreviewDeck::new();
    let mut view = PlayerView::new();

    view.apply(deck.toggle(0, "https://p.test/1.mp3"));
    assert_eq!(view.glyph(0), Glyph::Pause);

    view.apply(deck.toggle(1, "https://p.test/2.mp3"));
    assert_eq!(view.glyph(0), Glyph::Play);
    assert_eq!(view.glyph(1), Glyph::Pause);
    assert_eq!(view.audio().map(|a| a.src.as_str()), Some("https://p.test/2.mp3"));

    view.apply(deck.toggle(1, "https://p.test/2.mp3"));
    assert_eq!(view.glyph(1), Glyph::Play);
    assert_eq!(view.audio().map(|a| a.playing), Some(false));
}
