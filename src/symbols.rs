// src/symbols.rs

use colored::{ColoredString, Colorize};
use std::sync::LazyLock;

pub static ERROR: LazyLock<ColoredString> = LazyLock::new(|| "[X]".red());
pub static INFO: LazyLock<ColoredString> = LazyLock::new(|| "[i]".cyan());
pub static WARN: LazyLock<ColoredString> = LazyLock::new(|| "[!]".yellow());
// 播放链接行的前缀
pub static LINK: LazyLock<ColoredString> = LazyLock::new(|| "[>]".green().bold());
pub static CTRL_C: LazyLock<ColoredString> = LazyLock::new(|| "Ctrl+C".yellow());
