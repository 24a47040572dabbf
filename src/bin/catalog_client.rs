//! 产品目录终端客户端
//! 拉取并展示产品列表，支持带确认的删除与恢复全部产品

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use product_catalog::{
    client::{render::render, CatalogApi, HttpCatalogClient, ProductListView},
    core::config::{init_config, log_config_source},
    infrastructure::logger::init_console_logging,
};

#[derive(Debug, Parser)]
#[command(
    name = "catalog_client",
    about = "Terminal client for the product catalog service",
    after_help = "Commands:\n  list          re-fetch products\n  delete <id>   delete a product (asks for confirmation)\n  restore       restore all products once the list is empty\n  quit          exit"
)]
struct Args {
    /// 服务端地址，默认取配置中的 client.base_url
    #[arg(long)]
    base_url: Option<String>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = init_config(args.config.as_deref()).context("加载配置失败")?;
    init_console_logging(&config.logging.level)?;
    log_config_source(args.config.as_deref());

    let base_url = args.base_url.unwrap_or(config.client.base_url);
    let mut view = ProductListView::new(HttpCatalogClient::new(base_url));

    view.mount().await;
    print(&render(&view)).await?;

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print("> ").await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit" | "exit"), _) => break,
            (Some("list"), _) => view.fetch_products().await,
            (Some("delete"), Some(raw_id)) => match raw_id.parse::<i64>() {
                Ok(id) => confirm_and_delete(&mut view, id, &mut lines).await?,
                Err(_) => {
                    print(&format!("not a product id: {}\n", raw_id)).await?;
                    continue;
                }
            },
            (Some("restore"), _) if view.is_empty_state() => view.restore().await,
            (Some("restore"), _) => {
                print("restore is available once every product has been deleted\n").await?;
                continue;
            }
            (None, _) => continue,
            _ => {
                print("commands: list | delete <id> | restore | quit\n").await?;
                continue;
            }
        }

        print(&render(&view)).await?;
    }

    Ok(())
}

async fn confirm_and_delete<A: CatalogApi>(
    view: &mut ProductListView<A>,
    id: i64,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    if !view.request_delete(id) {
        print(&format!("no product with id {}\n", id)).await?;
        return Ok(());
    }

    print(&render(view)).await?;
    print("delete? [y/N] ").await?;

    let answer = lines.next_line().await?.unwrap_or_default();
    if matches!(answer.trim(), "y" | "Y" | "yes") {
        view.confirm_delete().await;
    } else {
        view.cancel_delete();
    }
    Ok(())
}

async fn print(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
