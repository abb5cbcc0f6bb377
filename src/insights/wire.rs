use serde::Deserialize;
use serde_json::Value;

use crate::core::wire::de_null_default;

#[derive(Debug, Deserialize)]
pub(crate) struct InsightsEnvelope {
    pub(crate) finance: Option<FinanceNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FinanceNode {
    pub(crate) result: Option<InsightsResult>,
    pub(crate) error: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsightsResult {
    pub(crate) symbol: Option<String>,
    pub(crate) instrument_info: Option<InstrumentInfo>,
    pub(crate) recommendation: Option<RecommendationNode>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) sig_devs: Vec<SigDevNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstrumentInfo {
    pub(crate) technical_events: Option<TechnicalEvents>,
    pub(crate) key_technicals: Option<KeyTechnicalsNode>,
    pub(crate) valuation: Option<ValuationNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TechnicalEvents {
    pub(crate) provider: Option<String>,
    pub(crate) short_term_outlook: Option<OutlookNode>,
    pub(crate) intermediate_term_outlook: Option<OutlookNode>,
    pub(crate) long_term_outlook: Option<OutlookNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OutlookNode {
    pub(crate) direction: Option<String>,
    pub(crate) score: Option<f64>,
    pub(crate) score_description: Option<String>,
    pub(crate) state_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KeyTechnicalsNode {
    pub(crate) support: Option<f64>,
    pub(crate) resistance: Option<f64>,
    pub(crate) stop_loss: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValuationNode {
    pub(crate) description: Option<String>,
    pub(crate) discount: Option<String>,
    pub(crate) relative_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationNode {
    pub(crate) rating: Option<String>,
    pub(crate) target_price: Option<f64>,
    pub(crate) provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SigDevNode {
    pub(crate) headline: Option<String>,
    pub(crate) date: Option<String>,
}
