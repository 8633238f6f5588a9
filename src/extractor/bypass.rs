// src/extractor/bypass.rs

use super::decode;
use crate::{
    client::ApiClient,
    constants::endpoints::COURSE_ID_PLACEHOLDER,
    error::*,
    models::CourseDetail,
};
use log::{info, warn};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::sync::Arc;
use url::Url;

/// 通过镜像服务获取课程的课时列表。镜像按顺序尝试，第一个成功的为准。
pub struct BypassResolver {
    http_client: Arc<ApiClient>,
    mirrors: Vec<String>,
}

impl BypassResolver {
    pub fn new(http_client: Arc<ApiClient>, mirrors: Vec<String>) -> Self {
        Self {
            http_client,
            mirrors,
        }
    }

    pub(crate) fn mirror_url(template: &str, course_id: &str) -> AppResult<Url> {
        let encoded = utf8_percent_encode(course_id, NON_ALPHANUMERIC).to_string();
        Ok(Url::parse(&template.replace(COURSE_ID_PLACEHOLDER, &encoded))?)
    }

    async fn try_mirror(&self, template: &str, course_id: &str) -> AppResult<CourseDetail> {
        let url = Self::mirror_url(template, course_id)?;
        let context = url.to_string();
        let body = self.http_client.get_text(url).await?;
        Ok(decode::decode_bypass(&body, &context)?.into())
    }

    pub async fn resolve_course(&self, course_id: &str) -> AppResult<CourseDetail> {
        for (index, template) in self.mirrors.iter().enumerate() {
            match self.try_mirror(template, course_id).await {
                Ok(detail) => {
                    info!(
                        "镜像 #{} 返回课程 '{}' 的 {} 个课时",
                        index + 1,
                        course_id,
                        detail.lessons.len()
                    );
                    return Ok(detail);
                }
                // 网络错误与解析失败都会切换到下一个镜像，仅在日志中区分
                Err(e) if e.is_decode() => {
                    warn!("镜像 #{} 响应无法解析，尝试下一个: {}", index + 1, e);
                }
                Err(e) => {
                    warn!("镜像 #{} 请求失败，尝试下一个: {}", index + 1, e);
                }
            }
        }
        Err(AppError::LoadFailed)
    }
}
