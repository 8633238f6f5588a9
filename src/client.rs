// src/client.rs

use crate::{config::AppConfig, error::*};
use log::{debug, trace};
use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::{Client, IntoUrl};
use serde::Serialize;
use std::sync::Arc;

/// 面向 GraphQL 接口与镜像服务的 HTTP 客户端。不做任何重试。
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<AppConfig>,
}

impl ApiClient {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// 以 JSON 请求体 POST 到 GraphQL 接口，返回原始响应文本
    pub async fn query(&self, payload: &str) -> AppResult<String> {
        trace!("GraphQL 请求载荷: {}", payload);
        let res = self
            .client
            .post(&self.config.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, self.config.referer())
            .body(payload.to_owned())
            .send()
            .await?;
        debug!("GraphQL 接口响应状态: {}", res.status());
        Ok(res.error_for_status()?.text().await?)
    }

    /// 将类型化的请求序列化后再发送，保证字符串字段被正确转义
    pub async fn query_json<P: Serialize + ?Sized>(&self, payload: &P) -> AppResult<String> {
        let body = serde_json::to_string(payload)?;
        self.query(&body).await
    }

    pub async fn get_text<T: IntoUrl>(&self, url: T) -> AppResult<String> {
        let res = self
            .client
            .get(url)
            .header(REFERER, self.config.referer())
            .send()
            .await?;
        debug!("GET {} -> {}", res.url(), res.status());
        Ok(res.error_for_status()?.text().await?)
    }
}
