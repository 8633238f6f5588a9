// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("网络请求失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("无法解析来自 '{context}' 的API响应: {source}")]
    ApiParseFailed {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("GraphQL 接口返回错误: {0}")]
    Graphql(String),
    // 所有镜像均失败时的终止错误，信息保持与宿主约定一致
    #[error("invalid response")]
    LoadFailed,
    #[error("未知的排序方式: '{0}'")]
    UnknownSortKey(String),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL 解析错误: {0}")]
    Url(#[from] url::ParseError),
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("用户中断")]
    UserInterrupt,
    #[error("{0}")] // 只打印内部信息，不加任何前缀
    UserInputError(String),
    #[error("未知错误: {0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// 是否属于响应解码类错误 (格式不符或 GraphQL 层报错)
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AppError::ApiParseFailed { .. } | AppError::Graphql(_) | AppError::Json(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
