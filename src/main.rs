use color_eyre::eyre::Context;
use color_eyre::Result;
use shared_lib::models::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 初始化日志
    tracing_subscriber::fmt::init();

    info!("🚀 启动作品集页面数据服务...");

    // 加载配置（.env + 环境变量）
    let config = AppConfig::load().context("Load app config")?;

    // 初始化远程源站连接
    let conn = api_client::initialize_client(config.clone()).context("Initialize http client")?;

    // ctrl-c 触发优雅关闭
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        info!("🛑 收到退出信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, conn, shutdown_rx).await?;

    Ok(())
}
