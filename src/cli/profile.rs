use tabled::Table;

use crate::{error, types::ProfileTableRow};

use super::{authenticated_client, spinner};

pub async fn profile() {
    let (spotify, _, token) = authenticated_client().await;

    let pb = spinner("Fetching profile...");
    let result = spotify.fetch_profile(&token).await;
    pb.finish_and_clear();

    let profile = match result {
        Ok(profile) => profile,
        Err(e) => error!("Failed to fetch profile: {}", e),
    };

    let rows = vec![
        ProfileTableRow {
            field: "Name".to_string(),
            value: profile.display_name.clone().unwrap_or_default(),
        },
        ProfileTableRow {
            field: "User ID".to_string(),
            value: profile.id.clone(),
        },
        ProfileTableRow {
            field: "Email".to_string(),
            value: profile.email.clone().unwrap_or_default(),
        },
        ProfileTableRow {
            field: "Image".to_string(),
            value: profile
                .images
                .first()
                .map(|i| i.url.clone())
                .unwrap_or_default(),
        },
        ProfileTableRow {
            field: "Link".to_string(),
            value: profile
                .external_urls
                .spotify
                .clone()
                .or(profile.href.clone())
                .unwrap_or_default(),
        },
    ];

    println!("{}", Table::new(rows));
}
