// tests/common/mod.rs

#![allow(dead_code)]

use skillshare_provider::config::AppConfig;
use std::{sync::Arc, time::Duration};

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).expect("无法读取模拟响应文件")
}

/// 所有端点都指向同一个模拟服务器
pub fn config_for(server_url: &str) -> Arc<AppConfig> {
    let mut config = AppConfig::default();
    config.main_url = server_url.to_string();
    config.api_url = format!("{}/api/graphql", server_url);
    config.bypass_mirrors = vec![
        format!("{}/id/{{course_id}}", server_url),
        format!("{}/fallback/{{course_id}}/0", server_url),
    ];
    Arc::new(config)
}

/// 只接受连接、从不响应的服务器，用于触发请求超时
pub async fn stalled_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("无法绑定本地端口");
    let url = format!("http://{}", listener.local_addr().expect("无法获取监听地址"));
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    url
}

/// 一个刚释放、无人监听的本地地址，连接会被拒绝
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("无法绑定本地端口");
    let url = format!("http://{}", listener.local_addr().expect("无法获取监听地址"));
    drop(listener);
    url
}

pub fn with_timeout(config: Arc<AppConfig>, timeout: Duration) -> Arc<AppConfig> {
    let mut config = (*config).clone();
    config.timeout = timeout;
    config.connect_timeout = timeout;
    Arc::new(config)
}
