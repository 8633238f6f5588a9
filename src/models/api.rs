// src/models/api.rs

use serde::{Deserialize, Serialize};

// --- GraphQL 请求结构体 ---

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
    pub operation_name: &'a str,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    pub sub_category: String,
    pub class_length: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListingVariables<'a> {
    #[serde(rename = "type")]
    pub list_type: &'a str,
    pub filter: ListingFilter,
    pub page_size: u32,
    pub cursor: String,
    pub sort_attribute: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchFilter<'a> {
    pub level: &'a [&'a str],
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchVariables<'a> {
    pub query: &'a str,
    #[serde(rename = "where")]
    pub filter: SearchFilter<'a>,
    pub after: &'a str,
    pub first: u32,
}

// --- GraphQL 响应结构体 ---

#[derive(Deserialize, Debug, Clone)]
pub struct GraphqlErrorItem {
    pub message: String,
}

/// GraphQL 通用响应外壳：`data` 与 `errors` 至少出现其一
#[derive(Deserialize, Debug, Clone)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorItem>,
}

/// 主页与搜索共用的课程节点
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "sku")]
    pub course_id: Option<String>,
    pub small_cover_url: Option<String>,
    pub large_cover_url: Option<String>,
}

// 主页: data.classListByType.nodes[]
#[derive(Deserialize, Debug, Clone)]
pub struct ApiNodes {
    pub nodes: Vec<ApiNode>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClassListByTypeData {
    pub class_list_by_type: ApiNodes,
}

// 搜索: data.search.edges[].node
#[derive(Deserialize, Debug, Clone)]
pub struct SearchEdge {
    pub node: ApiNode,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchEdges {
    pub edges: Vec<SearchEdge>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchData {
    pub search: SearchEdges,
}

// --- 镜像 (Bypass) API 响应结构体 ---

#[derive(Deserialize, Debug, Clone)]
pub struct BypassApiLesson {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// `lessons` 为必需字段，缺失即视为无效的镜像响应
#[derive(Deserialize, Debug, Clone)]
pub struct BypassApiData {
    #[serde(rename = "class")]
    pub title: Option<String>,
    #[serde(rename = "class_thumbnail")]
    pub large_cover_url: Option<String>,
    pub lessons: Vec<BypassApiLesson>,
}
