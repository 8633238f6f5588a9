// src/workflows.rs

use crate::{
    ProviderContext, constants,
    error::{AppError, AppResult},
    host::{Episode, ExtractorLink, LoadResponse, MainPageRequest, SearchResponse},
    models::SortKey,
    symbols, ui, utils,
};
use colored::*;
use log::{debug, info};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_results(results: &[SearchResponse]) {
    let pad = results.len().to_string().len();
    for (i, result) in results.iter().enumerate() {
        println!(
            "  [{}] {}",
            format!("{:<pad$}", i + 1, pad = pad).yellow(),
            utils::truncate_text(&result.name, constants::TITLE_TRUNCATE_LENGTH)
        );
        println!("      {}", result.url.dimmed());
    }
}

fn print_episodes(response: &LoadResponse) {
    ui::print_sub_header(&format!("{} ({} 个课时)", response.name, response.episodes.len()));
    if let Some(poster) = &response.poster_url {
        ui::info(&format!("封面: {}", poster));
    }
    for ep in &response.episodes {
        let title = ep.name.as_deref().unwrap_or("(无标题)");
        let url = if ep.data.is_empty() {
            "(无地址)".red().to_string()
        } else {
            ep.data.clone()
        };
        println!(
            "  S{:02}E{:03} {}\n          {}",
            ep.season,
            ep.episode,
            utils::truncate_text(title, constants::TITLE_TRUNCATE_LENGTH),
            url
        );
    }
}

fn print_link(link: &ExtractorLink) {
    println!(
        "{} {} [{}] referer={}",
        *symbols::LINK,
        link.url,
        if link.is_m3u8 { "HLS" } else { "direct" },
        link.referer
    );
}

async fn collect_links(context: &ProviderContext, data: &str) -> AppResult<Vec<ExtractorLink>> {
    let mut links = Vec::new();
    context
        .provider
        .load_links(data, false, &mut |_| {}, &mut |link| links.push(link))
        .await?;
    Ok(links)
}

/// 浏览主页：从第一页开始，直到没有更多结果或达到页数上限
pub(crate) async fn run_home(context: &ProviderContext, key: SortKey) -> AppResult<()> {
    let request = MainPageRequest {
        name: key.label().to_string(),
        data: key.as_str().to_string(),
    };
    let mut pages = Vec::new();
    for page in 1..=context.args.pages {
        let spinner = ui::new_spinner(&format!("正在获取 {} 第 {} 页...", request.name, page));
        let result = context.provider.get_main_page(page, &request).await;
        spinner.finish_and_clear();
        let response = result?;
        let has_next = response.has_next;
        pages.push(response);
        if !has_next {
            debug!("{} 在第 {} 页之后没有更多结果", key, page);
            break;
        }
    }

    if context.args.json {
        return print_json(&pages);
    }
    for (i, response) in pages.iter().enumerate() {
        for list in &response.items {
            ui::print_header(&format!("{} - 第 {} 页", list.name, i + 1));
            if list.list.is_empty() {
                ui::warn("本页没有课程。");
            }
            print_results(&list.list);
        }
    }
    if pages.last().is_some_and(|p| p.has_next) {
        ui::info("还有更多结果，可使用 --pages 拉取更多页。");
    }
    Ok(())
}

pub(crate) async fn run_search(context: &ProviderContext, term: &str) -> AppResult<Vec<SearchResponse>> {
    let spinner = ui::new_spinner(&format!("正在搜索 '{}'...", term));
    let result = context.provider.search(term).await;
    spinner.finish_and_clear();
    let results = result?;

    if context.args.json {
        print_json(&results)?;
    } else {
        ui::print_header(&format!("搜索 '{}' 的结果 (共 {} 条)", term, results.len()));
        if results.is_empty() {
            ui::warn("没有找到匹配的课程。");
        }
        print_results(&results);
    }
    Ok(results)
}

pub(crate) async fn run_load(context: &ProviderContext, input: &str) -> AppResult<LoadResponse> {
    let payload = utils::load_payload_from_input(input).ok_or_else(|| {
        AppError::UserInputError(format!(
            "输入 '{}' 既不是课程载荷 JSON，也不是有效的课程链接或 ID。",
            input
        ))
    })?;
    info!("加载课程: {:?}", payload);

    let spinner = ui::new_spinner("正在获取课时列表...");
    let result = context.provider.load(&payload.to_json()?).await;
    spinner.finish_and_clear();
    let response = result?;

    if context.args.json {
        print_json(&response)?;
    } else {
        print_episodes(&response);
    }
    Ok(response)
}

pub(crate) async fn run_links(context: &ProviderContext, url: &str) -> AppResult<()> {
    let links = collect_links(context, url).await?;
    if context.args.json {
        return print_json(&links);
    }
    links.iter().for_each(print_link);
    Ok(())
}

async fn links_for_episodes(context: &ProviderContext, episodes: &[Episode]) -> AppResult<()> {
    let options: Vec<String> = episodes
        .iter()
        .map(|ep| ep.name.clone().unwrap_or_else(|| format!("课时 {}", ep.episode + 1)))
        .collect();
    let choice = ui::selection_menu(
        &options,
        "选择要生成播放链接的课时",
        "支持格式: 1, 3, 2-4, all",
        "all",
    );
    for index in utils::parse_selection_indices(&choice, episodes.len()) {
        let episode = &episodes[index];
        if episode.data.is_empty() {
            ui::warn(&format!("'{}' 没有可用地址，跳过。", options[index]));
            continue;
        }
        for link in collect_links(context, &episode.data).await? {
            print_link(&link);
        }
    }
    Ok(())
}

async fn interactive_round(context: &ProviderContext, term: &str) -> AppResult<()> {
    let results = run_search(context, term).await?;
    if results.is_empty() {
        return Ok(());
    }
    let options: Vec<String> = results.iter().map(|r| r.name.clone()).collect();
    let choice = ui::selection_menu(&options, "选择课程", "请输入课程序号", "1");
    let Some(index) = choice
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|i| *i > 0 && *i <= results.len())
    else {
        ui::warn(&format!("无效的选择 '{}'。", choice));
        return Ok(());
    };

    let spinner = ui::new_spinner("正在获取课时列表...");
    let result = context.provider.load(&results[index - 1].url).await;
    spinner.finish_and_clear();
    let response = result?;
    print_episodes(&response);

    if !response.episodes.is_empty() {
        links_for_episodes(context, &response.episodes).await?;
    }
    Ok(())
}

/// 运行交互模式
pub(crate) async fn run_interactive(context: &ProviderContext) -> AppResult<()> {
    ui::print_header("交互模式");
    ui::plain(&format!(
        "输入关键词搜索课程，选择课程后可查看课时并生成播放链接。按 {} 可随时退出。",
        *symbols::CTRL_C
    ));

    loop {
        match ui::prompt("请输入搜索关键词 (直接按回车退出)", None) {
            Ok(term) if !term.is_empty() => {
                if let Err(e) = interactive_round(context, &term).await {
                    log::error!("交互模式任务 '{}' 失败: {}", term, e);
                    let message = match e {
                        AppError::Transport(req_err) if req_err.is_timeout() => {
                            format!("{} {}", *symbols::WARN, "请求超时，请稍后重试。".yellow())
                        }
                        AppError::LoadFailed => format!(
                            "{} {}",
                            *symbols::ERROR,
                            "所有镜像均无法提供该课程的课时 (invalid response)。".red()
                        ),
                        AppError::UserInputError(msg) => format!("{} {}", *symbols::WARN, msg.yellow()),
                        _ => format!("{} 处理时发生错误: {}", *symbols::ERROR, e.to_string().red()),
                    };
                    eprintln!("\n{}", message);
                }
            }
            Ok(_) => break,
            Err(_) => return Err(AppError::UserInterrupt),
        }
    }

    ui::plain("");
    ui::info("退出交互模式。");
    Ok(())
}
