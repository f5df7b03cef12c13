use serde::Deserialize;

/// `hdoOneDayAjax` response.
///
/// The endpoint replies with a JSON object regardless of the declared content type.
#[derive(Deserialize)]
pub struct Response {
    /// HDO bar fragment for the requested day.
    #[serde(default)]
    pub html: String,
}
