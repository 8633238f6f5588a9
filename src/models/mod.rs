// src/models/mod.rs

pub mod api;

use crate::error::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 主页列表的排序方式，每种排序各自维护一个分页游标
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[value(name = "SIX_MONTHS_ENGAGEMENT", alias = "popular")]
    SixMonthsEngagement,
    #[value(name = "ML_TRENDINESS", alias = "trending")]
    MlTrendiness,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::SixMonthsEngagement, SortKey::MlTrendiness];

    /// 接口中使用的 sortAttribute 值
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::SixMonthsEngagement => "SIX_MONTHS_ENGAGEMENT",
            SortKey::MlTrendiness => "ML_TRENDINESS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::SixMonthsEngagement => "Popular Classes",
            SortKey::MlTrendiness => "Trending Classes",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::UnknownSortKey(s.to_string()))
    }
}

/// 主页/搜索结果中的单门课程
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub course_id: Option<String>,
    pub small_cover_url: Option<String>,
    pub large_cover_url: Option<String>,
}

impl CourseSummary {
    /// 交给宿主、在加载详情时原样传回的最小载荷
    pub fn load_payload(&self) -> LoadPayload {
        LoadPayload {
            title: Some(self.title.clone()),
            course_id: self.course_id.clone(),
            large_cover_url: self.large_cover_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPayload {
    pub title: Option<String>,
    pub course_id: Option<String>,
    pub large_cover_url: Option<String>,
}

impl LoadPayload {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|source| AppError::ApiParseFailed {
            context: "load payload".to_string(),
            source,
        })
    }

    pub fn for_course_id(course_id: impl Into<String>) -> Self {
        Self {
            course_id: Some(course_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub title: Option<String>,
    /// 镜像未提供地址时为空字符串
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    pub title: String,
    pub large_cover_url: Option<String>,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub items: Vec<CourseSummary>,
    pub has_more: bool,
}
