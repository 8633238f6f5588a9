// src/config.rs

pub mod file;

use self::file::load_or_create_external_config;
use crate::{constants, error::AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub main_url: String,
    pub api_url: String,
    /// 按顺序尝试的镜像模板，必须包含 `{course_id}` 占位符
    pub bypass_mirrors: Vec<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            main_url: constants::endpoints::MAIN_URL.into(),
            api_url: constants::endpoints::API_URL.into(),
            bypass_mirrors: vec![
                constants::endpoints::BYPASS_MIRROR.into(),
                constants::endpoints::BYPASS_MIRROR_FALLBACK.into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl ExternalConfig {
    pub(crate) fn default_app_config() -> Self {
        Self {
            network: NetworkConfig {
                connect_timeout_secs: Some(constants::DEFAULT_CONNECT_TIMEOUT_SECS),
                timeout_secs: Some(constants::DEFAULT_TIMEOUT_SECS),
            },
            endpoints: EndpointConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub main_url: String,
    pub api_url: String,
    pub bypass_mirrors: Vec<String>,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn new() -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;
        Ok(Self::from_external(external_config))
    }

    pub fn from_external(external_config: ExternalConfig) -> Self {
        let endpoints = external_config.endpoints;
        Self {
            main_url: endpoints.main_url.trim_end_matches('/').to_string(),
            api_url: endpoints.api_url,
            bypass_mirrors: endpoints.bypass_mirrors,
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: Duration::from_secs(
                external_config
                    .network
                    .connect_timeout_secs
                    .unwrap_or(constants::DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            timeout: Duration::from_secs(
                external_config
                    .network
                    .timeout_secs
                    .unwrap_or(constants::DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// 请求时携带的 Referer，即站点根地址加斜杠
    pub fn referer(&self) -> String {
        format!("{}/", self.main_url)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_url: constants::endpoints::MAIN_URL.to_string(),
            api_url: constants::endpoints::API_URL.to_string(),
            bypass_mirrors: vec![
                constants::endpoints::BYPASS_MIRROR.to_string(),
                constants::endpoints::BYPASS_MIRROR_FALLBACK.to_string(),
            ],
            user_agent: "test-agent/1.0".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
        }
    }
}
