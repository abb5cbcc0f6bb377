use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire::{
    InsightsResult, KeyTechnicalsNode, OutlookNode, RecommendationNode, SigDevNode, ValuationNode,
};

/// Research insights for one symbol. Every part is optional; the API omits
/// sections it has no coverage for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub symbol: Option<String>,
    /// Who produced the technical outlooks.
    pub technical_provider: Option<String>,
    pub short_term: Option<Outlook>,
    pub intermediate_term: Option<Outlook>,
    pub long_term: Option<Outlook>,
    pub key_technicals: Option<KeyTechnicals>,
    pub valuation: Option<Valuation>,
    pub recommendation: Option<Recommendation>,
    pub significant_developments: Vec<SignificantDevelopment>,
}

/// A technical outlook over one horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outlook {
    /// `Bullish`, `Bearish` or `Neutral`.
    pub direction: Option<String>,
    pub score: Option<f64>,
    pub score_description: Option<String>,
    pub state_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyTechnicals {
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub stop_loss: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// e.g. `Overvalued`.
    pub description: Option<String>,
    /// e.g. `-9%`.
    pub discount: Option<String>,
    pub relative_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rating: Option<String>,
    pub target_price: Option<f64>,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignificantDevelopment {
    pub headline: Option<String>,
    pub date: Option<NaiveDate>,
}

impl From<OutlookNode> for Outlook {
    fn from(n: OutlookNode) -> Self {
        Self {
            direction: n.direction,
            score: n.score,
            score_description: n.score_description,
            state_description: n.state_description,
        }
    }
}

impl From<KeyTechnicalsNode> for KeyTechnicals {
    fn from(n: KeyTechnicalsNode) -> Self {
        Self {
            support: n.support,
            resistance: n.resistance,
            stop_loss: n.stop_loss,
        }
    }
}

impl From<ValuationNode> for Valuation {
    fn from(n: ValuationNode) -> Self {
        Self {
            description: n.description,
            discount: n.discount,
            relative_value: n.relative_value,
        }
    }
}

impl From<RecommendationNode> for Recommendation {
    fn from(n: RecommendationNode) -> Self {
        Self {
            rating: n.rating,
            target_price: n.target_price,
            provider: n.provider,
        }
    }
}

impl From<SigDevNode> for SignificantDevelopment {
    fn from(n: SigDevNode) -> Self {
        Self {
            headline: n.headline,
            date: n
                .date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
        }
    }
}

impl From<InsightsResult> for Insights {
    fn from(r: InsightsResult) -> Self {
        let (technical, key_technicals, valuation) = match r.instrument_info {
            Some(info) => (info.technical_events, info.key_technicals, info.valuation),
            None => (None, None, None),
        };
        let (technical_provider, short_term, intermediate_term, long_term) = match technical {
            Some(t) => (
                t.provider,
                t.short_term_outlook.map(Into::into),
                t.intermediate_term_outlook.map(Into::into),
                t.long_term_outlook.map(Into::into),
            ),
            None => (None, None, None, None),
        };

        Self {
            symbol: r.symbol,
            technical_provider,
            short_term,
            intermediate_term,
            long_term,
            key_technicals: key_technicals.map(Into::into),
            valuation: valuation.map(Into::into),
            recommendation: r.recommendation.map(Into::into),
            significant_developments: r.sig_devs.into_iter().map(Into::into).collect(),
        }
    }
}
