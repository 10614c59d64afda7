//! Mandi price record types.

use serde::{Deserialize, Serialize};

/// One price row as delivered by the dataset. Prices stay strings on
/// purpose; the feed sends them that way and sorting parses lazily.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRecord {
    #[serde(default)]
    pub commodity: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub max_price: String,
    #[serde(default)]
    pub modal_price: String,
    #[serde(default)]
    pub arrival_date: String,
}

/// Where a query's rows came from. Callers that don't care can flatten
/// with [`MarketData::into_records`]; callers that do can tell a degraded
/// answer from a live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketData {
    Live(Vec<MarketRecord>),
    Fallback(Vec<MarketRecord>),
}

impl MarketData {
    pub fn records(&self) -> &[MarketRecord] {
        match self {
            Self::Live(records) | Self::Fallback(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<MarketRecord> {
        match self {
            Self::Live(records) | Self::Fallback(records) => records,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DatasetResponse {
    #[serde(default)]
    pub records: Vec<MarketRecord>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_market_data_accessors() {
        let row = MarketRecord {
            commodity: "Wheat".to_string(),
            ..Default::default()
        };
        let live = MarketData::Live(vec![row.clone()]);
        assert!(!live.is_fallback());
        assert_eq!(live.records().len(), 1);
        assert_eq!(live.into_records()[0].commodity, "Wheat");

        let fallback = MarketData::Fallback(vec![row]);
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_record_decodes_with_missing_fields() {
        let record: MarketRecord =
            serde_json::from_str(r#"{"commodity": "Onion", "modal_price": "750"}"#).unwrap();
        assert_eq!(record.commodity, "Onion");
        assert_eq!(record.modal_price, "750");
        assert_eq!(record.market, "");
    }
}
