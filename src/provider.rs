// src/provider.rs

use crate::{
    client::ApiClient,
    config::AppConfig,
    constants,
    cursor::CursorTable,
    error::*,
    extractor::{
        bypass::BypassResolver, listing::ListingExtractor, mapper, search::SearchExtractor,
    },
    host::{
        HomePageResponse, LinkCallback, LoadResponse, MainApi, MainPageRequest, SearchResponse,
        SubtitleCallback, TvType,
    },
    models::{CourseDetail, CourseSummary, ListingPage, LoadPayload, SortKey},
};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

const SUPPORTED_TYPES: &[TvType] = &[TvType::Others];

pub struct SkillShareProvider {
    config: Arc<AppConfig>,
    listing: ListingExtractor,
    searcher: SearchExtractor,
    bypass: BypassResolver,
}

impl SkillShareProvider {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let http_client = Arc::new(ApiClient::new(config.clone())?);
        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: Arc<AppConfig>, http_client: Arc<ApiClient>) -> Self {
        let cursors = Arc::new(CursorTable::new());
        Self {
            listing: ListingExtractor::new(http_client.clone(), cursors),
            searcher: SearchExtractor::new(http_client.clone()),
            bypass: BypassResolver::new(http_client, config.bypass_mirrors.clone()),
            config,
        }
    }

    pub fn cursors(&self) -> &CursorTable {
        self.listing.cursors()
    }

    pub async fn fetch_page(&self, key: SortKey, page: u32) -> AppResult<ListingPage> {
        self.listing.fetch_page(key, page).await
    }

    pub async fn search_courses(&self, term: &str) -> AppResult<Vec<CourseSummary>> {
        self.searcher.search(term).await
    }

    pub async fn resolve_course(&self, course_id: &str) -> AppResult<CourseDetail> {
        self.bypass.resolve_course(course_id).await
    }

    /// 载荷中的标题与封面优先，缺失时使用镜像返回的值
    pub async fn load_payload(&self, payload: &LoadPayload) -> AppResult<(String, Option<String>, CourseDetail)> {
        let course_id = payload
            .course_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::UserInputError("载荷中缺少课程 ID (courseId)".to_string()))?;

        let detail = self.resolve_course(course_id).await?;
        let title = payload.title.clone().unwrap_or_else(|| detail.title.clone());
        let poster = payload
            .large_cover_url
            .clone()
            .or_else(|| detail.large_cover_url.clone());
        Ok((title, poster, detail))
    }
}

#[async_trait]
impl MainApi for SkillShareProvider {
    fn name(&self) -> &str {
        constants::plugin::NAME
    }

    fn main_url(&self) -> &str {
        &self.config.main_url
    }

    fn lang(&self) -> &str {
        constants::plugin::LANG
    }

    fn supported_types(&self) -> &[TvType] {
        SUPPORTED_TYPES
    }

    fn has_main_page(&self) -> bool {
        true
    }

    fn has_chromecast_support(&self) -> bool {
        true
    }

    fn main_page(&self) -> Vec<MainPageRequest> {
        SortKey::ALL
            .iter()
            .map(|key| MainPageRequest {
                name: key.label().to_string(),
                data: key.as_str().to_string(),
            })
            .collect()
    }

    async fn get_main_page(
        &self,
        page: u32,
        request: &MainPageRequest,
    ) -> AppResult<HomePageResponse> {
        let key: SortKey = request.data.parse()?;
        let listing = self.fetch_page(key, page).await?;
        mapper::to_home_page(&listing, &request.name, self.name())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchResponse>> {
        let results = self.search_courses(query).await?;
        results
            .iter()
            .map(|summary| mapper::to_search_response(summary, self.name()))
            .collect()
    }

    async fn load(&self, url: &str) -> AppResult<LoadResponse> {
        let payload = LoadPayload::from_json(url)?;
        let (name, poster_url, detail) = self.load_payload(&payload).await?;
        info!("课程 '{}' 加载完成，共 {} 个课时", name, detail.lessons.len());

        Ok(LoadResponse {
            name,
            url: url.to_string(),
            api_name: self.name().to_string(),
            tv_type: TvType::TvSeries,
            episodes: mapper::to_episodes(&detail.lessons),
            poster_url,
        })
    }

    async fn load_links(
        &self,
        data: &str,
        _is_casting: bool,
        _subtitle_callback: SubtitleCallback<'_>,
        callback: LinkCallback<'_>,
    ) -> AppResult<bool> {
        debug!("生成播放链接: {}", data);
        callback(mapper::playable_link(self.name(), data, self.config.referer()));
        Ok(true)
    }
}
