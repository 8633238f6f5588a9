// src/extractor/search.rs

use super::decode;
use crate::{
    client::ApiClient,
    constants::api,
    error::*,
    models::{
        CourseSummary,
        api::{GraphqlRequest, SearchFilter, SearchVariables},
    },
};
use log::info;
use std::sync::Arc;

/// 关键词搜索，只取第一页
pub struct SearchExtractor {
    http_client: Arc<ApiClient>,
}

impl SearchExtractor {
    pub fn new(http_client: Arc<ApiClient>) -> Self {
        Self { http_client }
    }

    pub(crate) fn build_request(term: &str) -> GraphqlRequest<'_, SearchVariables<'_>> {
        GraphqlRequest {
            query: api::SEARCH_QUERY,
            variables: SearchVariables {
                query: term,
                filter: SearchFilter {
                    level: api::SEARCH_LEVELS,
                },
                after: api::SEARCH_AFTER_SENTINEL,
                first: api::PAGE_SIZE,
            },
            operation_name: api::operations::SEARCH,
        }
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<CourseSummary>> {
        info!("搜索课程: '{}'", term);
        let body = self.http_client.query_json(&Self::build_request(term)).await?;
        let results: Vec<_> = decode::decode_search(&body)?
            .into_iter()
            .map(CourseSummary::from)
            .collect();
        info!("搜索 '{}' 得到 {} 条结果", term, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_search_payload_shape() {
        let value: Value = serde_json::to_value(SearchExtractor::build_request("python")).unwrap();
        assert_eq!(value["operationName"], "GetClassesQuery");
        assert_eq!(
            value["variables"],
            json!({
                "query": "python",
                "where": {"level": ["ALL_LEVELS", "BEGINNER", "INTERMEDIATE", "ADVANCED"]},
                "after": "-1",
                "first": 30
            })
        );
        assert!(value["query"].as_str().unwrap().starts_with("fragment ClassFields"));
    }

    #[test]
    fn test_search_term_is_escaped() {
        let term = "say \"hi\" \\ new\nline";
        let raw = serde_json::to_string(&SearchExtractor::build_request(term)).unwrap();
        let parsed: Value = serde_json::from_str(&raw).expect("载荷必须是合法 JSON");
        assert_eq!(parsed["variables"]["query"], term);
    }
}
