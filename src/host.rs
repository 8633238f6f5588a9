// src/host.rs

//! 宿主应用的插件契约。这里只保留 provider 需要填充或调用的部分：
//! 展示类型、回调类型、`MainApi` trait 以及注册表。

use crate::error::AppResult;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TvType {
    TvSeries,
    Others,
}

/// 主页的一个分区请求；`data` 为 provider 自定义的分区标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainPageRequest {
    pub name: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub name: String,
    /// 宿主加载详情时原样传回的不透明载荷
    pub url: String,
    pub api_name: String,
    pub tv_type: TvType,
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageList {
    pub name: String,
    pub list: Vec<SearchResponse>,
    pub is_horizontal_images: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageResponse {
    pub items: Vec<HomePageList>,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub data: String,
    pub name: Option<String>,
    pub season: u32,
    pub episode: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadResponse {
    pub name: String,
    pub url: String,
    pub api_name: String,
    pub tv_type: TvType,
    pub episodes: Vec<Episode>,
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleFile {
    pub lang: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractorLink {
    pub source: String,
    pub name: String,
    pub url: String,
    pub referer: String,
    /// `None` 表示清晰度未知
    pub quality: Option<u32>,
    pub is_m3u8: bool,
}

pub type SubtitleCallback<'a> = &'a mut (dyn FnMut(SubtitleFile) + Send);
pub type LinkCallback<'a> = &'a mut (dyn FnMut(ExtractorLink) + Send);

/// 宿主调用 provider 的入口。宿主对同一实例按顺序调用，等待上一次完成。
#[async_trait]
pub trait MainApi: Send + Sync {
    fn name(&self) -> &str;
    fn main_url(&self) -> &str;
    fn lang(&self) -> &str;
    fn supported_types(&self) -> &[TvType];

    fn has_main_page(&self) -> bool {
        false
    }

    fn has_chromecast_support(&self) -> bool {
        false
    }

    fn main_page(&self) -> Vec<MainPageRequest> {
        Vec::new()
    }

    async fn get_main_page(&self, page: u32, request: &MainPageRequest)
    -> AppResult<HomePageResponse>;

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResponse>>;

    async fn load(&self, url: &str) -> AppResult<LoadResponse>;

    async fn load_links(
        &self,
        data: &str,
        is_casting: bool,
        subtitle_callback: SubtitleCallback<'_>,
        callback: LinkCallback<'_>,
    ) -> AppResult<bool>;
}

/// 插件加载时向宿主注册的 provider 列表
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn MainApi>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_main_api(&mut self, provider: Arc<dyn MainApi>) {
        log::info!("注册 provider: {}", provider.name());
        self.providers.push(provider);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn MainApi>> {
        self.providers.iter().find(|p| p.name() == name).cloned()
    }

    pub fn providers(&self) -> &[Arc<dyn MainApi>] {
        &self.providers
    }
}
