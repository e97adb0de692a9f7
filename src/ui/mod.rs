//! # UI Module
//!
//! Server-side rendering of the pages of the local web application and the
//! state machine behind the track preview buttons.
//!
//! Pages are plain HTML strings; the browser only follows links and submits
//! forms. [`PreviewDeck`] decides what a preview button click does and
//! [`PlayerView`] records the result so the next render shows the right
//! glyphs and audio element.

pub mod pages;
pub mod player;

pub use player::{Glyph, PlayerView, PreviewDeck, PreviewEffect, PreviewState};
