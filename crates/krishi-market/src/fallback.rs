//! Embedded mandi rows shown when the live dataset is unreachable or empty.

use std::sync::OnceLock;

use crate::types::MarketRecord;

// (commodity, variety, market, state, min, max, modal, arrival_date)
const ROWS: [(&str, &str, &str, &str, &str, &str, &str, &str); 10] = [
    ("Wheat", "Sharbati", "Indore", "Madhya Pradesh", "2100", "2350", "2200", "18/02/2026"),
    ("Rice", "Basmati", "Karnal", "Haryana", "3200", "3800", "3500", "18/02/2026"),
    ("Tomato", "Hybrid", "Pune", "Maharashtra", "800", "1200", "1000", "18/02/2026"),
    ("Onion", "Red", "Nashik", "Maharashtra", "600", "900", "750", "18/02/2026"),
    ("Potato", "Jyoti", "Agra", "Uttar Pradesh", "400", "650", "520", "18/02/2026"),
    ("Soybean", "JS-335", "Bhopal", "Madhya Pradesh", "4200", "4600", "4400", "18/02/2026"),
    ("Cotton", "Bt Cotton", "Akola", "Maharashtra", "5800", "6200", "6000", "18/02/2026"),
    ("Maize", "Hybrid", "Davangere", "Karnataka", "1800", "2100", "1950", "18/02/2026"),
    ("Mustard", "Yellow", "Jaipur", "Rajasthan", "5200", "5600", "5400", "18/02/2026"),
    ("Chilli", "Teja", "Guntur", "Andhra Pradesh", "8000", "12000", "10000", "18/02/2026"),
];

/// The fixed fallback sequence, built once for the process lifetime.
pub fn fallback_rows() -> &'static [MarketRecord] {
    static TABLE: OnceLock<Vec<MarketRecord>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ROWS.iter()
            .map(
                |&(commodity, variety, market, state, min, max, modal, arrival)| MarketRecord {
                    commodity: commodity.to_string(),
                    variety: variety.to_string(),
                    market: market.to_string(),
                    state: state.to_string(),
                    min_price: min.to_string(),
                    max_price: max.to_string(),
                    modal_price: modal.to_string(),
                    arrival_date: arrival.to_string(),
                },
            )
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_ten_rows_starting_with_wheat() {
        let rows = fallback_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].commodity, "Wheat");
        assert_eq!(rows[0].modal_price, "2200");
        assert_eq!(rows[9].commodity, "Chilli");
    }

    #[test]
    fn test_fallback_is_stable_across_calls() {
        assert_eq!(fallback_rows().as_ptr(), fallback_rows().as_ptr());
    }
}
