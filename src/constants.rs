// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const TITLE_TRUNCATE_LENGTH: usize = 60;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 插件元数据 (与宿主的插件清单保持一致)
pub mod plugin {
    pub const NAME: &str = "SkillShare";
    pub const VERSION: u32 = 6;
    pub const LANG: &str = "en";
    pub const AUTHORS: &[&str] = &["techtanic", "Forthe"];
    pub const TV_TYPES: &[&str] = &["Others"];
    pub const ICON_URL: &str = "https://www.google.com/s2/favicons?domain=skillshare.com&sz=%size%";
}

pub mod endpoints {
    pub const MAIN_URL: &str = "https://www.skillshare.com";
    pub const API_URL: &str = "https://www.skillshare.com/api/graphql";
    /// `{course_id}` 会被替换为经过百分号编码的课程 ID
    pub const BYPASS_MIRROR: &str = "https://skillshare.techtanic.xyz/id/{course_id}";
    pub const BYPASS_MIRROR_FALLBACK: &str =
        "https://skillshare-api.heckernohecking.repl.co/{course_id}/0";
    pub const COURSE_ID_PLACEHOLDER: &str = "{course_id}";
}

pub mod api {
    pub const PAGE_SIZE: u32 = 30;
    pub const LISTING_TYPE: &str = "TRENDING_CLASSES";
    pub const SEARCH_AFTER_SENTINEL: &str = "-1";
    pub const SEARCH_LEVELS: &[&str] = &["ALL_LEVELS", "BEGINNER", "INTERMEDIATE", "ADVANCED"];

    pub mod operations {
        pub const LISTING: &str = "GetClassesByType";
        pub const SEARCH: &str = "GetClassesQuery";
    }

    pub const LISTING_QUERY: &str = "query GetClassesByType($filter: ClassFilters!, $pageSize: Int, $cursor: String, $type: ClassListType!, $sortAttribute: ClassListByTypeSortAttribute) { classListByType(type: $type, where: $filter, first: $pageSize, after: $cursor, sortAttribute: $sortAttribute) { nodes { id title url sku smallCoverUrl largeCoverUrl } } }";

    pub const SEARCH_QUERY: &str = "fragment ClassFields on Class { id smallCoverUrl largeCoverUrl sku title url } query GetClassesQuery($query: String!, $where: SearchFilters!, $after: String!, $first: Int!) { search(query: $query, where: $where, analyticsTags: [\"src:browser\", \"src:browser:search\"], after: $after, first: $first) { edges { node { ...ClassFields } } } }";
}
