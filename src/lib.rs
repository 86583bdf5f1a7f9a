pub mod error;
pub mod ticker;

use reqwest::{Client, ClientBuilder, RequestBuilder, Url};
use serde::Serialize;

use error::Error;
use ticker::{Ticker, TickerQuery};

// Base URL for the Nomics API
pub const BASE_URL: &str = "https://api.nomics.com/v1";

pub struct NomicsClient {
    api_key: String,
    base_url: String,
    reqwest: Client,
}

impl NomicsClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Client pointed at a non-default base URL, for mirrors or a local
    /// test endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let reqwest = ClientBuilder::new()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        }
    }

    /// Price, volume, market cap, and rank for currencies across 1 hour,
    /// 1 day, 7 day, 30 day, 365 day, and year-to-date intervals.
    /// Current prices are updated every 10 seconds.
    pub async fn ticker(&self, query: &TickerQuery) -> Result<Vec<Ticker>, Error> {
        let body = self.ticker_raw(query).await?;
        let tickers = serde_json::from_slice(&body)?;
        Ok(tickers)
    }

    /// Same request as [`Self::ticker`], returning the response body
    /// undecoded.
    pub async fn ticker_raw(&self, query: &TickerQuery) -> Result<Vec<u8>, Error> {
        let url = self.endpoint_url("currencies/ticker")?;
        self.get_raw(url, query).await
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let endpoint = format!("{}/{}", self.base_url, path);
        Url::parse(&endpoint).map_err(|error| Error::UrlBuild(error.to_string()))
    }

    // GET request with query parameters; the key is always the first pair.
    fn request<P: Serialize + ?Sized>(&self, url: Url, params: &P) -> RequestBuilder {
        self.reqwest
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
    }

    async fn get_raw<P: Serialize + ?Sized>(
        &self,
        url: Url,
        params: &P,
    ) -> Result<Vec<u8>, Error> {
        let response = self
            .request(url, params)
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;

        let body = response.bytes().await.map_err(Error::BodyRead)?;
        Ok(body.to_vec())
    }
}
