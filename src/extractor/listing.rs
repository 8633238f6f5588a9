// src/extractor/listing.rs

use super::decode;
use crate::{
    client::ApiClient,
    constants::api,
    cursor::CursorTable,
    error::*,
    models::{
        CourseSummary, ListingPage, SortKey,
        api::{GraphqlRequest, ListingFilter, ListingVariables},
    },
};
use log::{debug, info};
use std::sync::Arc;

/// 按排序方式分页拉取主页课程列表
pub struct ListingExtractor {
    http_client: Arc<ApiClient>,
    cursors: Arc<CursorTable>,
}

impl ListingExtractor {
    pub fn new(http_client: Arc<ApiClient>, cursors: Arc<CursorTable>) -> Self {
        Self {
            http_client,
            cursors,
        }
    }

    pub fn cursors(&self) -> &CursorTable {
        &self.cursors
    }

    pub(crate) fn build_request(key: SortKey, cursor: String) -> GraphqlRequest<'static, ListingVariables<'static>> {
        GraphqlRequest {
            query: api::LISTING_QUERY,
            variables: ListingVariables {
                list_type: api::LISTING_TYPE,
                filter: ListingFilter::default(),
                page_size: api::PAGE_SIZE,
                cursor,
                sort_attribute: key.as_str(),
            },
            operation_name: api::operations::LISTING,
        }
    }

    pub async fn fetch_page(&self, key: SortKey, page: u32) -> AppResult<ListingPage> {
        self.cursors.reset_if_first_page(key, page);
        let cursor = self.cursors.cursor_for(key);
        info!("拉取主页 {} 第 {} 页 (cursor='{}')", key, page, cursor);

        let request = Self::build_request(key, cursor);
        let body = self.http_client.query_json(&request).await?;
        let nodes = decode::decode_listing(&body)?;

        self.cursors
            .advance(key, nodes.last().and_then(|node| node.id.as_deref()));

        let items: Vec<CourseSummary> = nodes.into_iter().map(CourseSummary::from).collect();
        debug!("{} 第 {} 页共 {} 门课程", key, page, items.len());
        Ok(ListingPage {
            has_more: !items.is_empty(),
            items,
        })
    }
}
