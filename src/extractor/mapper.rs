// src/extractor/mapper.rs

use crate::{
    error::AppResult,
    host::{Episode, ExtractorLink, HomePageList, HomePageResponse, SearchResponse, TvType},
    models::{
        CourseDetail, CourseSummary, Lesson, ListingPage,
        api::{ApiNode, BypassApiData},
    },
};

/// 所有剧集都放在第一季
pub const LESSON_SEASON: u32 = 1;

impl From<ApiNode> for CourseSummary {
    fn from(node: ApiNode) -> Self {
        Self {
            id: node.id.unwrap_or_default(),
            title: node.title.unwrap_or_default(),
            url: node.url,
            course_id: node.course_id,
            small_cover_url: node.small_cover_url,
            large_cover_url: node.large_cover_url,
        }
    }
}

impl From<BypassApiData> for CourseDetail {
    fn from(data: BypassApiData) -> Self {
        Self {
            title: data.title.unwrap_or_default(),
            large_cover_url: data.large_cover_url,
            lessons: data
                .lessons
                .into_iter()
                .map(|lesson| Lesson {
                    title: lesson.title,
                    url: lesson.url.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

pub fn to_search_response(summary: &CourseSummary, api_name: &str) -> AppResult<SearchResponse> {
    Ok(SearchResponse {
        name: summary.title.clone(),
        url: summary.load_payload().to_json()?,
        api_name: api_name.to_string(),
        tv_type: TvType::TvSeries,
        poster_url: summary.small_cover_url.clone(),
    })
}

pub fn to_home_page(page: &ListingPage, list_name: &str, api_name: &str) -> AppResult<HomePageResponse> {
    let list = page
        .items
        .iter()
        .map(|item| to_search_response(item, api_name))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(HomePageResponse {
        items: vec![HomePageList {
            name: list_name.to_string(),
            list,
            is_horizontal_images: true,
        }],
        has_next: page.has_more,
    })
}

/// 课时按原顺序编号为 0..N-1
pub fn to_episodes(lessons: &[Lesson]) -> Vec<Episode> {
    lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| Episode {
            data: lesson.url.clone(),
            name: lesson.title.clone(),
            season: LESSON_SEASON,
            episode: index as u32,
        })
        .collect()
}

pub fn playable_link(name: &str, url: &str, referer: String) -> ExtractorLink {
    ExtractorLink {
        source: name.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        referer,
        quality: None,
        is_m3u8: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoadPayload, SortKey, api::BypassApiLesson};

    fn summary() -> CourseSummary {
        CourseSummary::from(ApiNode {
            id: Some("node-1".into()),
            title: Some("Watercolor Basics".into()),
            url: Some("https://www.skillshare.com/en/classes/watercolor/123".into()),
            course_id: Some("123".into()),
            small_cover_url: Some("small.jpg".into()),
            large_cover_url: Some("large.jpg".into()),
        })
    }

    #[test]
    fn test_missing_title_falls_back_to_empty() {
        let summary = CourseSummary::from(ApiNode {
            id: Some("x".into()),
            ..Default::default()
        });
        assert_eq!(summary.title, "");
        assert_eq!(summary.course_id, None);
    }

    #[test]
    fn test_search_response_carries_load_payload() {
        let response = to_search_response(&summary(), "SkillShare").unwrap();
        assert_eq!(response.name, "Watercolor Basics");
        assert_eq!(response.poster_url.as_deref(), Some("small.jpg"));
        assert_eq!(response.tv_type, TvType::TvSeries);

        let payload = LoadPayload::from_json(&response.url).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Watercolor Basics"));
        assert_eq!(payload.course_id.as_deref(), Some("123"));
        assert_eq!(payload.large_cover_url.as_deref(), Some("large.jpg"));
    }

    #[test]
    fn test_home_page_uses_sort_label() {
        let page = ListingPage {
            items: vec![summary()],
            has_more: true,
        };
        let home = to_home_page(&page, SortKey::MlTrendiness.label(), "SkillShare").unwrap();
        assert!(home.has_next);
        assert_eq!(home.items.len(), 1);
        assert_eq!(home.items[0].name, "Trending Classes");
        assert!(home.items[0].is_horizontal_images);
    }

    #[test]
    fn test_episodes_numbered_in_order() {
        let detail = CourseDetail::from(BypassApiData {
            title: Some("C".into()),
            large_cover_url: None,
            lessons: vec![
                BypassApiLesson { title: Some("Intro".into()), url: Some("u0".into()) },
                BypassApiLesson { title: Some("Middle".into()), url: None },
                BypassApiLesson { title: None, url: Some("u2".into()) },
            ],
        });
        let episodes = to_episodes(&detail.lessons);

        assert_eq!(episodes.len(), 3);
        for (i, ep) in episodes.iter().enumerate() {
            assert_eq!(ep.episode, i as u32);
            assert_eq!(ep.season, LESSON_SEASON);
        }
        assert_eq!(episodes[0].name.as_deref(), Some("Intro"));
        assert_eq!(episodes[1].data, "");
        assert_eq!(episodes[2].data, "u2");
    }

    #[test]
    fn test_playable_link_is_hls_with_unknown_quality() {
        let link = playable_link("SkillShare", "https://cdn.test/a.m3u8", "https://www.skillshare.com/".into());
        assert!(link.is_m3u8);
        assert_eq!(link.quality, None);
        assert_eq!(link.referer, "https://www.skillshare.com/");
    }
}
