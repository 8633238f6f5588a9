// src/utils.rs

use crate::models::LoadPayload;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static COURSE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
// 形如 https://www.skillshare.com/en/classes/<slug>/<id>
static CLASS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/classes/[^/?#]+/(\d+)(?:[/?#]|$)").unwrap());

pub fn is_course_id(text: &str) -> bool {
    COURSE_ID_RE.is_match(text)
}

pub fn course_id_from_class_url(url: &str) -> Option<&str> {
    CLASS_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 命令行 `--load` 的输入：载荷 JSON、课程链接或纯数字 ID
pub fn load_payload_from_input(input: &str) -> Option<LoadPayload> {
    let input = input.trim();
    if input.starts_with('{') {
        return LoadPayload::from_json(input).ok();
    }
    if is_course_id(input) {
        return Some(LoadPayload::for_course_id(input));
    }
    course_id_from_class_url(input).map(LoadPayload::for_course_id)
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}

pub fn parse_selection_indices(selection_str: &str, total_items: usize) -> Vec<usize> {
    if selection_str.to_lowercase() == "all" { return (0..total_items).collect(); }
    let mut indices = BTreeSet::new();
    for part in selection_str.split(',').map(|s| s.trim()) {
        if part.is_empty() { continue; }
        if let Some(range_part) = part.split_once('-') {
            if let (Ok(start), Ok(end)) = (range_part.0.parse::<usize>(), range_part.1.parse::<usize>()) {
                if start == 0 || end == 0 { continue; }
                let (min, max) = (start.min(end), start.max(end));
                for i in min..=max {
                    if i > 0 && i <= total_items { indices.insert(i - 1); }
                }
            }
        } else if let Ok(num) = part.parse::<usize>() {
            if num > 0 && num <= total_items { indices.insert(num - 1); }
        }
    }
    indices.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_indices() {
        assert_eq!(parse_selection_indices("1,3,5", 5), vec![0, 2, 4]);
        assert_eq!(parse_selection_indices("2-4", 5), vec![1, 2, 3]);
        assert_eq!(parse_selection_indices("All", 3), vec![0, 1, 2]);
        // 混合、乱序和重复
        assert_eq!(parse_selection_indices("5, 1-2, 1", 5), vec![0, 1, 4]);
        // 无效和越界输入
        assert_eq!(parse_selection_indices("1,10,foo,-2", 5), vec![0]);
        assert_eq!(parse_selection_indices("", 5), Vec::<usize>::new());
    }

    #[test]
    fn test_course_id_from_class_url() {
        assert_eq!(
            course_id_from_class_url("https://www.skillshare.com/en/classes/Intro-to-Drawing/1234567890"),
            Some("1234567890")
        );
        assert_eq!(
            course_id_from_class_url("https://www.skillshare.com/classes/x/42?via=search"),
            Some("42")
        );
        assert_eq!(course_id_from_class_url("https://www.skillshare.com/en/browse"), None);
    }

    #[test]
    fn test_load_payload_from_input() {
        assert_eq!(load_payload_from_input("987").unwrap().course_id.as_deref(), Some("987"));
        assert_eq!(
            load_payload_from_input(r#"{"title":"T","courseId":"5","largeCoverUrl":null}"#)
                .unwrap()
                .title
                .as_deref(),
            Some("T")
        );
        assert!(load_payload_from_input("not a course").is_none());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 60), "short");
        let truncated = truncate_text(&"a".repeat(100), 20);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.len(), 20);
    }
}
