// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod extractor;
pub mod host;
pub mod logger;
pub mod models;
pub mod plugin;
pub mod provider;
pub mod symbols;
pub mod ui;
pub mod utils;
mod workflows;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{AppError, AppResult},
    host::{MainApi, ProviderRegistry},
};
use anyhow::anyhow;
use log::debug;
use std::sync::Arc;

/// 命令行各模式共享的执行上下文
#[derive(Clone)]
pub struct ProviderContext {
    pub provider: Arc<dyn MainApi>,
    pub args: Arc<Cli>,
}

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: Arc<Cli>) -> AppResult<()> {
    debug!("CLI 参数: {:?}", args);

    let config = Arc::new(AppConfig::new()?);
    debug!("加载的应用配置: {:?}", config);

    // 命令行扮演宿主的角色：先走插件注册流程，再按名称取出 provider
    let mut registry = ProviderRegistry::new();
    plugin::load(&mut registry, config)?;
    let provider = registry
        .get(constants::plugin::NAME)
        .ok_or_else(|| AppError::Other(anyhow!("provider '{}' 未注册", constants::plugin::NAME)))?;

    let context = ProviderContext {
        provider,
        args: args.clone(),
    };

    if args.interactive {
        workflows::run_interactive(&context).await?;
    } else if let Some(key) = args.home {
        workflows::run_home(&context, key).await?;
    } else if let Some(term) = &args.search {
        workflows::run_search(&context, term).await?;
    } else if let Some(input) = &args.load {
        workflows::run_load(&context, input).await?;
    } else if let Some(url) = &args.links {
        workflows::run_links(&context, url).await?;
    }

    Ok(())
}
