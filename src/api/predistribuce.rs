//! [PRE Distribuce](https://www.predistribuce.cz/cs/potrebuji-zaridit/zakaznici/stav-hdo/) HDO client.

mod error;
mod response;

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use reqwest::Url;

pub use self::error::{Error, FetchError};
use self::response::Response;
use crate::{
    core::{parser, period::Period},
    prelude::*,
};

pub const HDO_ONE_DAY_URL: &str =
    "https://www.predistribuce.cz/com/PREdi/UI/Forms/Hdo/HdoForm:hdoOneDayAjax";

pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    #[instrument(skip_all, fields(url = %url))]
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { inner, url })
    }

    /// Fetch and parse the periods of the receiver command for the specified day.
    ///
    /// Defaults to the current UTC date.
    #[instrument(skip_all, fields(command_id = command_id))]
    pub async fn get_periods(
        &self,
        command_id: &str,
        on: Option<NaiveDate>,
    ) -> Result<Vec<Period>, Error> {
        let markup = self.get_markup(command_id, on).await?;
        let periods = parser::parse(&markup)?;
        info!(n_periods = periods.len(), "fetched");
        Ok(periods)
    }

    /// Fetch the raw HDO bar markup.
    #[instrument(skip_all, level = Level::DEBUG, fields(command_id = command_id))]
    pub async fn get_markup(
        &self,
        command_id: &str,
        on: Option<NaiveDate>,
    ) -> Result<String, FetchError> {
        let date = on.unwrap_or_else(|| Utc::now().date_naive()).format("%d.%m.%Y").to_string();
        info!(%date, "fetching…");
        let body = self
            .inner
            .post(self.url.clone())
            .form(&[("datum", date.as_str()), ("povel", command_id), ("povelTitle", command_id)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str::<Response>(&body)?.html)
    }

    /// Check whether the receiver command yields any periods today.
    ///
    /// Any failure counts as invalid.
    #[instrument(skip_all, fields(command_id = command_id))]
    pub async fn validate_command_id(&self, command_id: &str) -> bool {
        match self.get_periods(command_id, None).await {
            Ok(periods) => !periods.is_empty(),
            Err(error) => {
                let error = anyhow::Error::from(error);
                warn!("failed to validate the command ID: {error:#}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    use super::*;
    use crate::core::fixtures::{SAMPLE_HTML, sample_periods};

    fn new_client(server: &ServerGuard) -> Result<Client> {
        Client::new(Url::parse(&format!("{}/hdo", server.url()))?, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_get_periods_ok() -> Result {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hdo")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("datum".into(), "13.02.2026".into()),
                Matcher::UrlEncoded("povel".into(), "492".into()),
                Matcher::UrlEncoded("povelTitle".into(), "492".into()),
            ]))
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(json!({ "html": SAMPLE_HTML }).to_string())
            .create_async()
            .await;

        let periods =
            new_client(&server)?.get_periods("492", NaiveDate::from_ymd_opt(2026, 2, 13)).await?;
        assert_eq!(periods, sample_periods());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_get_periods_defaults_to_today_ok() -> Result {
        let mut server = Server::new_async().await;
        let today = Utc::now().date_naive().format("%d.%m.%Y").to_string();
        let mock = server
            .mock("POST", "/hdo")
            .match_body(Matcher::UrlEncoded("datum".into(), today))
            .with_body(json!({ "html": SAMPLE_HTML }).to_string())
            .create_async()
            .await;

        assert_eq!(new_client(&server)?.get_periods("492", None).await?.len(), 5);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_get_periods_http_error() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server.mock("POST", "/hdo").with_status(500).create_async().await;

        let result = new_client(&server)?.get_periods("492", None).await;
        assert!(matches!(result, Err(Error::Fetch(FetchError::Transport(_)))), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_periods_invalid_json() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server.mock("POST", "/hdo").with_body("not json").create_async().await;

        let result = new_client(&server)?.get_periods("492", None).await;
        assert!(matches!(result, Err(Error::Fetch(FetchError::Envelope(_)))), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_periods_missing_html_ok() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server.mock("POST", "/hdo").with_body("{}").create_async().await;

        assert!(new_client(&server)?.get_periods("492", None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_periods_malformed_time() -> Result {
        let mut server = Server::new_async().await;
        let html = r#"<span class="hdont"></span><span title="00:00 - 25:00"></span>"#;
        let _mock = server
            .mock("POST", "/hdo")
            .with_body(json!({ "html": html }).to_string())
            .create_async()
            .await;

        let result = new_client(&server)?.get_periods("492", None).await;
        assert!(matches!(result, Err(Error::Parse(_))), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_validate_command_id_valid() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/hdo")
            .with_body(json!({ "html": SAMPLE_HTML }).to_string())
            .create_async()
            .await;

        assert!(new_client(&server)?.validate_command_id("492").await);
        Ok(())
    }

    #[tokio::test]
    async fn test_validate_command_id_no_periods() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/hdo")
            .with_body(json!({ "html": "" }).to_string())
            .create_async()
            .await;

        assert!(!new_client(&server)?.validate_command_id("999").await);
        Ok(())
    }

    #[tokio::test]
    async fn test_validate_command_id_http_error() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server.mock("POST", "/hdo").with_status(503).create_async().await;

        assert!(!new_client(&server)?.validate_command_id("492").await);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_get_periods_live_ok() -> Result {
        let client = Client::new(Url::parse(HDO_ONE_DAY_URL)?, Duration::from_secs(30))?;
        let periods = client.get_periods("492", None).await?;
        assert!(!periods.is_empty());
        assert!(periods.is_sorted_by_key(|period| period.start));
        Ok(())
    }
}
