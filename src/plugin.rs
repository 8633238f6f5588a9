// src/plugin.rs

use crate::{
    config::AppConfig, constants::plugin as meta, error::AppResult, host::ProviderRegistry,
    provider::SkillShareProvider,
};
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// 插件在宿主插件仓库中的可用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PluginStatus {
    Down = 0,
    Ok = 1,
    Slow = 2,
    BetaOnly = 3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginManifest {
    pub name: &'static str,
    pub version: u32,
    pub language: &'static str,
    pub authors: &'static [&'static str],
    pub status: PluginStatus,
    pub tv_types: &'static [&'static str],
    pub icon_url: &'static str,
}

pub fn manifest() -> PluginManifest {
    PluginManifest {
        name: meta::NAME,
        version: meta::VERSION,
        language: meta::LANG,
        authors: meta::AUTHORS,
        status: PluginStatus::Ok,
        tv_types: meta::TV_TYPES,
        icon_url: meta::ICON_URL,
    }
}

/// 插件被宿主加载时调用一次，向注册表登记本插件提供的 provider
pub fn load(registry: &mut ProviderRegistry, config: Arc<AppConfig>) -> AppResult<()> {
    let manifest = manifest();
    info!("加载插件 {} v{} ({:?})", manifest.name, manifest.version, manifest.status);
    registry.register_main_api(Arc::new(SkillShareProvider::new(config)?));
    Ok(())
}
