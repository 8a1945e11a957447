//! Property search filters

use serde::Deserialize;

/// Rows returned when the caller does not ask for a specific limit.
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

/// Optional criteria for the property search.
///
/// `None` contributes nothing to the statement. An explicit `Some(0.0)`
/// threshold is a real filter, not an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearch {
    /// Case-sensitive substring match on the city name.
    pub city: Option<String>,
    /// Exact match on the owning user's id.
    pub owner_id: Option<i64>,
    /// Dollar lower bound on the nightly price.
    pub minimum_price_per_night: Option<f64>,
    /// Dollar upper bound on the nightly price.
    pub maximum_price_per_night: Option<f64>,
    /// Lower bound on the average review rating.
    pub minimum_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_query_payload() {
        let filters: PropertySearch = serde_json::from_str(
            r#"{"city": "Vancouver", "minimum_price_per_night": 50.0, "minimum_rating": 4}"#,
        )
        .unwrap();

        assert_eq!(filters.city.as_deref(), Some("Vancouver"));
        assert_eq!(filters.minimum_price_per_night, Some(50.0));
        assert_eq!(filters.minimum_rating, Some(4.0));
        assert_eq!(filters.owner_id, None);
        assert_eq!(filters.maximum_price_per_night, None);
    }

    #[test]
    fn empty_payload_means_no_filters() {
        let filters: PropertySearch = serde_json::from_str("{}").unwrap();
        assert!(filters.city.is_none());
        assert!(filters.owner_id.is_none());
        assert!(filters.minimum_rating.is_none());
    }
}
