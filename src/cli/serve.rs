use crate::{error, info, server, server::AppState, warning};

use super::{load_config, load_session};

/// Runs the local web application until the process is stopped.
///
/// Opening the server root in the browser starts the login: the landing page
/// redirects to Spotify, and Spotify redirects back to `/callback` with the
/// authorization code. From there the browser drives everything else.
///
/// # Arguments
///
/// * `open_browser` - Open the default browser at the server root once the
///   server is listening
pub async fn serve(open_browser: bool) {
    let config = load_config();
    let session = load_session().await;
    if session.is_authenticated() {
        info!("Existing session found; visiting the page signs in again.");
    }

    let state = AppState::new(config, session);
    let listener = match server::bind(&state).await {
        Ok(listener) => listener,
        Err(e) => error!("{}", e),
    };

    let url = match listener.local_addr() {
        Ok(addr) => format!("http://{}/", addr),
        Err(e) => error!("Failed to read server address: {}", e),
    };
    info!("Serving on {} (Ctrl+C to stop)", url);

    if open_browser && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
    }

    if let Err(e) = server::serve(listener, state).await {
        error!("Server stopped: {}", e);
    }
}
