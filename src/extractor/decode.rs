// src/extractor/decode.rs

//! 三种响应形态各自一个解码函数；主页与搜索最终都得到 `ApiNode` 序列。

use crate::{
    error::*,
    models::api::{
        ApiNode, BypassApiData, ClassListByTypeData, GraphqlEnvelope, SearchData,
    },
};
use log::{debug, warn};
use serde::de::DeserializeOwned;

fn decode_envelope<T: DeserializeOwned>(body: &str, context: &str) -> AppResult<T> {
    let envelope: GraphqlEnvelope<T> =
        serde_json::from_str(body).map_err(|source| AppError::ApiParseFailed {
            context: context.to_string(),
            source,
        })?;

    if !envelope.errors.is_empty() {
        let messages: Vec<_> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        warn!("{} 返回 GraphQL 错误: {:?}", context, messages);
        // 部分成功时仍然使用已返回的数据
        if envelope.data.is_none() {
            return Err(AppError::Graphql(messages.join("; ")));
        }
    }

    envelope
        .data
        .ok_or_else(|| AppError::Graphql(format!("{} 的响应中缺少 data 字段", context)))
}

/// 主页: `data.classListByType.nodes[]`
pub fn decode_listing(body: &str) -> AppResult<Vec<ApiNode>> {
    let data: ClassListByTypeData = decode_envelope(body, "classListByType")?;
    let nodes = data.class_list_by_type.nodes;
    debug!("主页响应解码出 {} 个节点", nodes.len());
    Ok(nodes)
}

/// 搜索: `data.search.edges[].node`
pub fn decode_search(body: &str) -> AppResult<Vec<ApiNode>> {
    let data: SearchData = decode_envelope(body, "search")?;
    let nodes: Vec<_> = data.search.edges.into_iter().map(|edge| edge.node).collect();
    debug!("搜索响应解码出 {} 个节点", nodes.len());
    Ok(nodes)
}

pub fn decode_bypass(body: &str, context: &str) -> AppResult<BypassApiData> {
    serde_json::from_str(body).map_err(|source| AppError::ApiParseFailed {
        context: context.to_string(),
        source,
    })
}
