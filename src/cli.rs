use artwork_table_common::parse_bulk_input;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artwork-table")]
#[command(about = "美術作品カタログをページ送りで閲覧し、行を選択するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1ページ分を取得して表示
    Page {
        /// ページ番号（1始まり）
        #[arg(default_value = "1")]
        page: u32,

        /// 先頭N件を一括選択した状態で表示
        #[arg(long, value_parser = parse_select_first)]
        select_first: Option<u64>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的にページを行き来して行を選択
    Browse {
        /// 開始ページ
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// 設定を表示/編集
    Config {
        /// API URLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--select-first` の値を取得前に検証する
pub fn parse_select_first(value: &str) -> Result<u64, String> {
    parse_bulk_input(value).map_err(|_| format!("1以上の整数を指定してください: {}", value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("artwork-table").chain(args.iter().copied()))
    }

    #[test]
    fn test_select_first_accepts_positive_count() {
        let cli = parse(&["page", "3", "--select-first", " 20 "]).unwrap();
        match cli.command {
            Commands::Page { page, select_first, .. } => {
                assert_eq!(page, 3);
                assert_eq!(select_first, Some(20));
            }
            _ => panic!("page コマンドになっていない"),
        }
    }

    #[test]
    fn test_select_first_rejects_invalid_count_before_fetch() {
        for bad in ["--select-first=abc", "--select-first=0", "--select-first=-4"] {
            let err = parse(&["page", "1", bad]).err().expect("受理されてしまった");
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "入力: {:?}", bad);
        }
    }

    #[test]
    fn test_parse_select_first_message() {
        assert_eq!(parse_select_first("12"), Ok(12));
        assert_eq!(parse_select_first(" x ").unwrap_err(), "1以上の整数を指定してください: x");
    }
}
