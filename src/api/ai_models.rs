//! AI Model Endpoints
//!
//! `GET /models` with optional filter query parameters.

use collection_view::{ApiConfig, RestSource};

use crate::models::AiModel;

pub type ModelSource = RestSource<AiModel>;

/// Server-side filters for the model listing. Empty values are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelFilters {
    pub category: String,
    pub pricing_type: String,
}

impl ModelFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("category", self.category.as_str()), ("pricingType", self.pricing_type.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

pub fn model_source(config: &ApiConfig, filters: &ModelFilters, token: Option<&str>) -> ModelSource {
    filters
        .query_pairs()
        .into_iter()
        .fold(RestSource::new(config, "models"), |source, (key, value)| source.with_query(key, value))
        .with_bearer(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_send_nothing() {
        assert!(ModelFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_filters_to_query() {
        let filters = ModelFilters {
            category: "COMPUTER_VISION".into(),
            pricing_type: String::new(),
        };
        assert_eq!(filters.query_pairs(), vec![("category", "COMPUTER_VISION")]);
    }
}
