use bon::Builder;
use serde::{Deserialize, Serialize, Serializer};

/// Filters for the currencies ticker endpoint.
/// https://nomics.com/docs/#operation/getCurrenciesTicker
///
/// Every field is optional; unset fields are left out of the query string
/// entirely. The API key is not part of the query struct — the client adds
/// it to every request.
#[derive(Serialize, Debug, Default, Builder)]
#[builder(on(String, into))]
pub struct TickerQuery {
    #[serde(
        skip_serializing_if = "list_is_empty",
        serialize_with = "comma_separated"
    )]
    pub ids: Option<Vec<String>>,

    #[serde(
        skip_serializing_if = "list_is_empty",
        serialize_with = "comma_separated"
    )]
    pub interval: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    // The upstream wire format has no explicit-false encoding: the flag is
    // either present as "true" or absent.
    #[builder(default)]
    #[serde(
        rename = "include-transparency",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub transparency: bool,

    #[serde(rename = "per-page", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

fn list_is_empty(list: &Option<Vec<String>>) -> bool {
    list.as_deref().map_or(true, |values| values.is_empty())
}

// Lists go over the wire as one comma-joined value under a single key.
fn comma_separated<S: Serializer>(
    list: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match list {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}

/// One ticker entry per queried currency.
///
/// Numeric values are kept as the strings the API sends; no parsing happens
/// at this layer. Fields missing from the response default to empty.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Ticker {
    pub id: String,
    pub currency: String,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    pub status: String,
    pub price: String,
    pub price_date: String,
    pub price_timestamp: String,
    pub circulating_supply: String,
    pub max_supply: String,
    pub market_cap: String,
    pub num_exchanges: String,
    pub num_pairs: String,
    pub num_pairs_unmapped: String,
    pub first_candle: String,
    pub first_trade: String,
    pub first_order_book: String,
    pub rank: String,
    pub rank_delta: String,
    pub high: String,
    pub high_timestamp: String,
    #[serde(rename = "1h")]
    pub interval_1h: TickerInterval,
    #[serde(rename = "1d")]
    pub interval_1d: TickerInterval,
    #[serde(rename = "7d")]
    pub interval_7d: TickerInterval,
    #[serde(rename = "30d")]
    pub interval_30d: TickerInterval,
    #[serde(rename = "365d")]
    pub interval_365d: TickerInterval,
    #[serde(rename = "ytd")]
    pub interval_ytd: TickerInterval,
}

/// Volume, price and market-cap movement over one interval.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct TickerInterval {
    pub volume: String,
    pub price_change: String,
    pub price_change_pct: String,
    pub volume_change: String,
    pub volume_change_pct: String,
    pub market_cap_change: String,
    pub market_cap_change_pct: String,
}
