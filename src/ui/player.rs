use std::collections::HashMap;

/// Symbol shown on a preview button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Play => "&#9654;",
            Glyph::Pause => "&#10074;&#10074;",
        }
    }
}

/// Side effect the page has to carry out, in the order returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEffect {
    Play(String),
    Pause(String),
    Glyph(usize, Glyph),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Playing { button: usize, url: String },
    Paused { button: usize, url: String },
}

/// Tracks which preview is loaded and which button last started it.
///
/// Only one preview plays at a time. Starting another one pauses the current
/// one and resets the glyph of the button that started it.
#[derive(Debug, Default)]
pub struct PreviewDeck {
    state: PreviewState,
}

impl PreviewDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Handles a click on the preview button `button` for `url`.
    pub fn toggle(&mut self, button: usize, url: &str) -> Vec<PreviewEffect> {
        let mut effects = Vec::new();

        self.state = match std::mem::take(&mut self.state) {
            PreviewState::Playing { url: current, .. } if current == url => {
                effects.push(PreviewEffect::Pause(current.clone()));
                effects.push(PreviewEffect::Glyph(button, Glyph::Play));
                PreviewState::Paused {
                    button,
                    url: current,
                }
            }
            PreviewState::Paused { url: current, .. } if current == url => {
                effects.push(PreviewEffect::Play(current.clone()));
                effects.push(PreviewEffect::Glyph(button, Glyph::Pause));
                PreviewState::Playing {
                    button,
                    url: current,
                }
            }
            previous => {
                if let PreviewState::Playing {
                    button: last,
                    url: current,
                }
                | PreviewState::Paused {
                    button: last,
                    url: current,
                } = previous
                {
                    effects.push(PreviewEffect::Pause(current));
                    effects.push(PreviewEffect::Glyph(last, Glyph::Play));
                }
                effects.push(PreviewEffect::Play(url.to_string()));
                effects.push(PreviewEffect::Glyph(button, Glyph::Pause));
                PreviewState::Playing {
                    button,
                    url: url.to_string(),
                }
            }
        };

        effects
    }

    /// The loaded preview reached its end.
    pub fn ended(&mut self) -> Vec<PreviewEffect> {
        match std::mem::take(&mut self.state) {
            PreviewState::Playing { button, url } => {
                let effects = vec![
                    PreviewEffect::Pause(url.clone()),
                    PreviewEffect::Glyph(button, Glyph::Play),
                ];
                self.state = PreviewState::Paused { button, url };
                effects
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Stops whatever is loaded. Used when the track list is replaced.
    pub fn reset(&mut self) -> Vec<PreviewEffect> {
        match std::mem::take(&mut self.state) {
            PreviewState::Playing { url, .. } => vec![PreviewEffect::Pause(url)],
            _ => Vec::new(),
        }
    }
}

/// The single audio element of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioElement {
    pub src: String,
    pub playing: bool,
}

/// What the preview controls currently look like on the page.
#[derive(Debug, Default)]
pub struct PlayerView {
    glyphs: HashMap<usize, Glyph>,
    audio: Option<AudioElement>,
}

impl PlayerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, effects: Vec<PreviewEffect>) {
        for effect in effects {
            match effect {
                PreviewEffect::Play(src) => {
                    self.audio = Some(AudioElement { src, playing: true });
                }
                PreviewEffect::Pause(src) => {
                    if let Some(audio) = self.audio.as_mut().filter(|a| a.src == src) {
                        audio.playing = false;
                    }
                }
                PreviewEffect::Glyph(button, glyph) => {
                    self.glyphs.insert(button, glyph);
                }
            }
        }
    }

    pub fn glyph(&self, button: usize) -> Glyph {
        self.glyphs.get(&button).copied().unwrap_or(Glyph::Play)
    }

    pub fn audio(&self) -> Option<&AudioElement> {
        self.audio.as_ref()
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.audio = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pausing_and_resuming_the_same_preview() {
        let mut deck = PreviewDeck::new();
        deck.toggle(0, "a.mp3");

        assert_eq!(
            deck.toggle(0, "a.mp3"),
            vec![
                PreviewEffect::Pause("a.mp3".into()),
                PreviewEffect::Glyph(0, Glyph::Play)
            ]
        );
        assert!(matches!(deck.state(), PreviewState::Paused { button: 0, .. }));

        assert_eq!(
            deck.toggle(0, "a.mp3"),
            vec![
                PreviewEffect::Play("a.mp3".into()),
                PreviewEffect::Glyph(0, Glyph::Pause)
            ]
        );
    }

    #[test]
    fn ended_resets_glyph_but_keeps_preview_loaded() {
        let mut deck = PreviewDeck::new();
        deck.toggle(3, "a.mp3");

        assert_eq!(
            deck.ended(),
            vec![
                PreviewEffect::Pause("a.mp3".into()),
                PreviewEffect::Glyph(3, Glyph::Play)
            ]
        );
        assert!(deck.ended().is_empty());

        // clicking again resumes the same preview
        assert_eq!(deck.toggle(3, "a.mp3")[0], PreviewEffect::Play("a.mp3".into()));
    }

    #[test]
    fn view_follows_effects() {
        let mut deck = PreviewDeck::new();
        let mut view = PlayerView::new();

        view.apply(deck.toggle(0, "a.mp3"));
        view.apply(deck.toggle(1, "b.mp3"));

        assert_eq!(view.glyph(0), Glyph::Play);
        assert_eq!(view.glyph(1), Glyph::Pause);
        assert_eq!(
            view.audio(),
            Some(&AudioElement {
                src: "b.mp3".into(),
                playing: true
            })
        );

        view.apply(deck.reset());
        assert_eq!(view.audio().map(|a| a.playing), Some(false));
        assert_eq!(deck.state(), &PreviewState::Idle);
    }
}
