//! Search and sort over returned price rows.
//!
//! The adapter hands back rows untouched; this is the table view's logic,
//! kept here as pure functions.

use crate::types::MarketRecord;

/// Sortable price columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceColumn {
    Min,
    Max,
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Case-insensitive substring match over commodity, market and variety.
/// An empty needle matches everything.
pub fn matches_search(record: &MarketRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record.commodity.to_lowercase().contains(&needle)
        || record.market.to_lowercase().contains(&needle)
        || record.variety.to_lowercase().contains(&needle)
}

/// Stable numeric sort on a price column; unparseable prices sort as 0.
pub fn sort_by_price(records: &mut [MarketRecord], column: PriceColumn, dir: SortDir) {
    records.sort_by(|a, b| {
        let a = price_value(a, column);
        let b = price_value(b, column);
        match dir {
            SortDir::Asc => a.total_cmp(&b),
            SortDir::Desc => b.total_cmp(&a),
        }
    });
}

fn price_value(record: &MarketRecord, column: PriceColumn) -> f64 {
    let raw = match column {
        PriceColumn::Min => &record.min_price,
        PriceColumn::Max => &record.max_price,
        PriceColumn::Modal => &record.modal_price,
    };
    raw.trim().parse().unwrap_or(0.0)
}
