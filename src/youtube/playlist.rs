use reqwest::Client;

use crate::{
    config,
    types::{
        CreateYoutubePlaylistRequest, CreateYoutubePlaylistResponse, YoutubePlaylistSnippet,
        YoutubePlaylistStatus,
    },
};

/// Creates a public YouTube playlist with the given title and description.
///
/// Posts to the `/playlists` endpoint with the `snippet` and `status`
/// parts. The caller supplies a valid OAuth access token obtained through
/// the authorization-code flow.
pub async fn create(
    token: &str,
    title: String,
    description: String,
) -> Result<CreateYoutubePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists?part=snippet,status",
        uri = &config::youtube_apiurl()
    );

    let request = CreateYoutubePlaylistRequest {
        snippet: YoutubePlaylistSnippet { title, description },
        status: YoutubePlaylistStatus {
            privacy_status: "public".to_string(),
        },
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreateYoutubePlaylistResponse>().await
}
