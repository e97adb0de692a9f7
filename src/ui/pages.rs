use std::fmt::Write;

use crate::{
    spotify::PlaylistOutcome,
    types::{Profile, TimeRange, Track},
    utils::{self, MAX_TRACK_LIMIT, MIN_TRACK_LIMIT, escape_html},
};

use super::player::{Glyph, PlayerView};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:60rem}\
table{border-collapse:collapse}td{padding:.4rem .8rem;vertical-align:middle}\
.notice{color:#a33}.muted{color:#777}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{title}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        title = escape_html(title),
    )
}

/// Form selecting the time range and number of tracks.
fn tracks_form(action: &str, method: &str, submit: &str, time_range: TimeRange, limit: u32) -> String {
    let mut options = String::new();
    for range in TimeRange::ALL {
        let selected = if range == time_range { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            range.as_str(),
            selected,
            range.label()
        );
    }

    format!(
        "<form method=\"{method}\" action=\"{action}\">\
<label>Time range <select id=\"timeRange\" name=\"time_range\">{options}</select></label> \
<label>Songs <input id=\"numOfSongs\" name=\"limit\" type=\"number\" min=\"{MIN_TRACK_LIMIT}\" max=\"{MAX_TRACK_LIMIT}\" value=\"{limit}\"></label> \
<button type=\"submit\">{submit}</button></form>",
    )
}

/// Page shown after a successful login.
pub fn profile_page(profile: &Profile) -> String {
    let mut body = String::from("<h1>Logged in as <span id=\"displayName\">");
    body.push_str(&escape_html(
        profile.display_name.as_deref().unwrap_or(&profile.id),
    ));
    body.push_str("</span></h1><section id=\"profile\"><h2>Your profile data</h2>");

    if let Some(image) = profile.images.first() {
        let url = escape_html(&image.url);
        let _ = write!(
            body,
            "<span id=\"avatar\"><img src=\"{url}\" width=\"200\" height=\"200\" alt=\"avatar\"></span>\
<p>Profile Image: <span id=\"imgUrl\">{url}</span></p>"
        );
    }

    let _ = write!(
        body,
        "<ul><li>User ID: <span id=\"id\">{}</span></li><li>Email: <span id=\"email\">{}</span></li>",
        escape_html(&profile.id),
        escape_html(profile.email.as_deref().unwrap_or("-")),
    );
    if let Some(href) = &profile.href {
        let href = escape_html(href);
        let _ = write!(body, "<li>Link: <a id=\"url\" href=\"{href}\">{href}</a></li>");
    }
    if let Some(uri) = &profile.uri {
        let link = escape_html(profile.external_urls.spotify.as_deref().unwrap_or(uri));
        let _ = write!(
            body,
            "<li>Spotify URI: <a id=\"uri\" href=\"{}\">{}</a></li>",
            link,
            escape_html(uri)
        );
    }
    body.push_str("</ul></section><section><h2>Top tracks</h2>");
    body.push_str(&tracks_form(
        "/top-tracks",
        "get",
        "Get top tracks",
        TimeRange::default(),
        utils::DEFAULT_TRACK_LIMIT,
    ));
    body.push_str("</section>");

    layout("Your Spotify profile", &body)
}

/// One row of the top tracks table.
pub fn track_row(index: usize, track: &Track, glyph: Glyph) -> String {
    let mut row = String::from("<tr>");
    let _ = write!(row, "<td>{}</td>", escape_html(&utils::describe_track(track)));

    match track.album.images.first() {
        Some(image) => {
            let _ = write!(
                row,
                "<td><img src=\"{}\" alt=\"{} album cover\" width=\"100\"></td>",
                escape_html(&image.url),
                escape_html(&track.name)
            );
        }
        None => row.push_str("<td></td>"),
    }

    if track.preview_url.is_some() {
        let _ = write!(
            row,
            "<td><form method=\"get\" action=\"/preview/{index}\"><button type=\"submit\">{}</button></form></td>",
            glyph.symbol()
        );
    } else {
        row.push_str("<td>No Preview Available.</td>");
    }

    row.push_str("</tr>");
    row
}

/// Table of top tracks with preview controls and the playlist form.
pub fn tracks_page(tracks: &[Track], time_range: TimeRange, limit: u32, view: &PlayerView) -> String {
    let mut body = format!(
        "<p><a href=\"/\">Back</a></p><h1>Top tracks</h1>{}",
        tracks_form("/top-tracks", "get", "Refresh", time_range, limit)
    );

    if tracks.is_empty() {
        body.push_str("<p class=\"muted\">No listening history for this time range yet.</p>");
        return layout("Top tracks", &body);
    }

    body.push_str("<table id=\"topTracksTable\"><tbody>");
    for (index, track) in tracks.iter().enumerate() {
        body.push_str(&track_row(index, track, view.glyph(index)));
    }
    body.push_str("</tbody></table>");

    if let Some(audio) = view.audio().filter(|a| a.playing) {
        let _ = write!(
            body,
            "<audio src=\"{}\" autoplay onended=\"window.location='/preview/ended'\"></audio>",
            escape_html(&audio.src)
        );
    }

    body.push_str("<h2>Save as playlist</h2>");
    body.push_str(&tracks_form(
        "/playlist",
        "post",
        "Create playlist",
        time_range,
        limit,
    ));

    layout("Top tracks", &body)
}

/// Outcome of a playlist creation attempt.
pub fn playlist_page(name: &str, outcome: &PlaylistOutcome) -> String {
    let name = escape_html(name);
    let body = match outcome {
        PlaylistOutcome::Created {
            playlist,
            track_count,
            ..
        } => {
            let link = match &playlist.external_urls.spotify {
                Some(url) => format!(" <a href=\"{}\">Open in Spotify</a>", escape_html(url)),
                None => String::new(),
            };
            format!("<h1>Playlist created</h1><p>Added {track_count} tracks to <strong>{name}</strong>.{link}</p>")
        }
        PlaylistOutcome::NotCreated(e) => format!(
            "<h1>Playlist not created</h1><p class=\"notice\">{}</p>",
            escape_html(&e.to_string())
        ),
        PlaylistOutcome::TracksNotAdded { error, removed, .. } => {
            let aftermath = if *removed {
                "The empty playlist was removed again."
            } else {
                "The playlist was created but is empty."
            };
            format!(
                "<h1>Tracks not added</h1><p class=\"notice\">{}</p><p>{aftermath}</p>",
                escape_html(&error.to_string())
            )
        }
    };

    layout(
        "Create playlist",
        &format!("{body}<p><a href=\"/top-tracks\">Back to top tracks</a></p>"),
    )
}

/// Failure page with a way back to the start of the flow.
pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            "<h1>{}</h1><p class=\"notice\">{}</p><p><a href=\"/\">Try again</a></p>",
            escape_html(title),
            escape_html(message)
        ),
    )
}
