use artwork_table::{browse, cli, client, config, error, render};
use artwork_table_common::{PageLoader, ViewState};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{ArtworkTableError, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Page { page, select_first, json } => {
            if page == 0 {
                return Err(ArtworkTableError::InvalidPage(page));
            }

            let config = Config::load()?;
            let loader = client::HttpPageLoader::new(&config)?;
            let mut view = ViewState::new();

            // 単発表示では取得失敗をそのままエラーにする
            let request = view.begin_load(page)?;
            let loaded = loader.load(request.page).await?;
            view.finish_load(request, Ok(loaded));

            if let Some(n) = select_first {
                view.activate_bulk(n).map_err(|_| ArtworkTableError::InvalidBulkCount(n))?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&view.rows())?);
            } else {
                println!("{}", render::render_view(&view));
            }
        }

        Commands::Browse { page } => {
            let config = Config::load()?;
            let loader = client::HttpPageLoader::new(&config)?;
            println!("🖼  artwork-table - {}\n", loader.api_url());
            browse::run_browse(&loader, page).await?;
        }

        Commands::Config { set_api_url, show } => {
            // 壊れた設定ファイルでも上書きできるようにする
            let mut config = Config::load_or_default();

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API URLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  API URL: {}", config.api_url);
                println!("  実際に使うURL: {}", config.resolved_api_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
