// ==========================================
// 价格目录导入系统 - 命令行入口
// ==========================================

use anyhow::Context;
use clap::{Parser, Subcommand};
use price_catalog::app::AppState;
use price_catalog::config::CatalogConfig;
use price_catalog::logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "price-catalog", version, about = "价格目录导入工具")]
struct Cli {
    /// JSON 配置文件路径
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 数据目录（覆盖配置文件与环境变量）
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 从工作簿导入价格目录
    Import {
        /// 工作簿路径（默认使用数据目录下的工作簿）
        #[arg(long)]
        workbook: Option<PathBuf>,
    },
    /// 列出工作簿各表的表头
    Headers {
        #[arg(long)]
        workbook: Option<PathBuf>,
    },
    /// 汇率设置
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// 查询已导入的商品
    Products {
        /// 只显示指定编码
        #[arg(long)]
        code: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// 显示当前汇率
    Show,
    /// 保存汇率
    Set {
        #[arg(long)]
        usd_billete: f64,
        #[arg(long)]
        usd_divisa: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    tracing::info!("{} v{}", price_catalog::APP_NAME, price_catalog::VERSION);

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let state = AppState::new(config);

    match cli.command {
        Command::Import { workbook } => {
            let response = match workbook {
                Some(path) => state.import_api.run_import_from(&path).await?,
                None => state.import_api.run_import().await?,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Headers { workbook } => {
            let headers = state.import_api.inspect_headers(workbook.as_deref())?;
            for sheet in headers {
                println!("[{}] {}", sheet.sheet, sheet.headers.join(", "));
            }
        }
        Command::Settings { action } => {
            let settings = match action {
                SettingsAction::Show => state.settings_api.get_settings(),
                SettingsAction::Set {
                    usd_billete,
                    usd_divisa,
                } => state.settings_api.save_settings(usd_billete, usd_divisa)?,
            };
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Products { code } => match code {
            Some(code) => {
                let product = state.catalog_api.get_product(&code).await?;
                println!("{}", serde_json::to_string_pretty(&product)?);
            }
            None => {
                let products = state.catalog_api.list_products().await?;
                println!("{}", serde_json::to_string_pretty(&products)?);
            }
        },
    }

    Ok(())
}
