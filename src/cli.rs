// src/cli.rs

use crate::models::SortKey;
use clap::{Parser, ValueEnum, command, crate_version};

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// command 属性
#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["interactive", "home", "search", "load", "links"]),
))]
pub struct Cli {
    // --- 运行模式 (Mode) ---
    /// 启动交互式会话：搜索、选择课程、查看课时
    #[arg(short, long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub interactive: bool,
    /// 浏览主页列表 (按指定排序方式)
    #[arg(long, value_enum, value_name = "SORT", help_heading = "Mode")]
    pub home: Option<SortKey>,
    /// 按关键词搜索课程
    #[arg(short, long, value_name = "TERM", help_heading = "Mode")]
    pub search: Option<String>,
    /// 加载课程的课时列表 (载荷 JSON、课程链接或课程 ID)
    #[arg(long, value_name = "INPUT", help_heading = "Mode")]
    pub load: Option<String>,
    /// 为课时地址生成播放链接
    #[arg(long, value_name = "URL", help_heading = "Mode")]
    pub links: Option<String>,

    // --- 选项 (Options) ---
    /// [主页模式] 最多连续拉取的页数
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..), help_heading = "Options")]
    pub pages: u32,
    /// 以 JSON 格式输出结果
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub json: bool,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
