//! 产品目录服务入口

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use product_catalog::{
    build_router,
    core::config::{init_config, log_config_source},
    infrastructure::{image::ImageUrlGenerator, logger::init_logging},
    AppState, Catalog, CatalogService,
};

#[derive(Debug, Parser)]
#[command(name = "catalog_server", about = "In-memory product catalog REST service")]
struct Args {
    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = init_config(args.config.as_deref()).context("加载配置失败")?;
    let _guard = init_logging(&config.logging).context("初始化日志失败")?;
    log_config_source(args.config.as_deref());

    let catalog = Catalog::default();
    info!("✅ 已加载 {} 个初始产品", catalog.products().len());

    let service = CatalogService::new(catalog, ImageUrlGenerator::from_config(&config.images));
    let app = build_router(AppState::new(service), &config.cors)?;

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("🚀 产品目录服务运行在 http://{}", address);
    info!("📖 API 端点:");
    info!("   GET    /api/products       - 获取所有产品");
    info!("   DELETE /api/products/:id   - 删除产品");
    info!("   POST   /api/products/reset - 恢复所有产品");
    info!("   GET    /health             - 健康检查");
    info!("🌐 允许的跨域来源: {}", config.cors.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务已安全关闭");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "无法监听停止信号");
    }
    info!("收到停止信号，正在关闭服务...");
}
