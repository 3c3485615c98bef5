//! 対話式ブラウズモジュール
//!
//! 端末でページを行き来しながら行選択を組み立てる。
//! 状態はすべて ViewState に持ち、ブラウザ版と同じ操作で更新する。

use crate::error::{ArtworkTableError, Result};
use crate::render::render_view;
use artwork_table_common::{ArtworkId, LoadOutcome, PageLoader, ViewState};
use dialoguer::{Input, MultiSelect};
use indicatif::ProgressBar;
use std::time::Duration;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次のページ
    Next,
    /// 前のページ
    Previous,
    /// 先頭ページ
    First,
    /// 最終ページ
    Last,
    /// 指定ページへ移動
    Goto(u32),
    /// 現在ページを再取得
    Reload,
    /// 行番号（ページ内1始まり）の選択を反転
    Toggle(Vec<usize>),
    /// チェックボックスで現在ページの選択を編集
    Edit,
    /// 現在ページを全選択
    SelectPage,
    /// 現在ページの選択を解除
    ClearPage,
    /// 先頭n件を一括選択（入力値はそのまま渡す）
    Bulk(String),
    /// 操作一覧
    Help,
    /// 終了
    Quit,
    /// 解釈できない入力
    Unknown(String),
}

pub const HELP: &str = "操作: [n]次 [p]前 [f]先頭 [l]最後 [g N]移動 [r]再取得 \
[t 1 3]行を反転 [e]編集 [a]全選択 [c]解除 [b N]先頭N件 [?]ヘルプ [q]終了";

/// 入力をアクションに変換
pub fn parse_browse_command(input: &str) -> BrowseAction {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };

    match (command, rest) {
        ("n", "") | ("", "") => BrowseAction::Next,
        ("p", "") => BrowseAction::Previous,
        ("f", "") => BrowseAction::First,
        ("l", "") => BrowseAction::Last,
        ("r", "") => BrowseAction::Reload,
        ("e", "") => BrowseAction::Edit,
        ("a", "") => BrowseAction::SelectPage,
        ("c", "") => BrowseAction::ClearPage,
        ("?", "") | ("h", "") => BrowseAction::Help,
        ("q", "") | ("Q", "") => BrowseAction::Quit,
        ("g", page) => match page.parse::<u32>() {
            Ok(p) if p > 0 => BrowseAction::Goto(p),
            _ => BrowseAction::Unknown(trimmed.to_string()),
        },
        ("b", value) => BrowseAction::Bulk(value.to_string()),
        ("t", rows) if !rows.is_empty() => {
            let parsed: std::result::Result<Vec<usize>, _> = rows
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<usize>())
                .collect();
            match parsed {
                Ok(numbers) if numbers.iter().all(|&n| n > 0) => BrowseAction::Toggle(numbers),
                _ => BrowseAction::Unknown(trimmed.to_string()),
            }
        }
        _ => BrowseAction::Unknown(trimmed.to_string()),
    }
}

/// ページ内の行番号をIDに変換（範囲外は無視）
pub fn row_numbers_to_ids(view: &ViewState, numbers: &[usize]) -> Vec<ArtworkId> {
    let records = view.records();
    numbers
        .iter()
        .filter_map(|&n| records.get(n.checked_sub(1)?).map(|r| r.id))
        .collect()
}

/// スピナーを出しながらページを取得
pub async fn load_with_spinner<L: PageLoader>(
    view: &mut ViewState,
    loader: &L,
    page: u32,
) -> Result<LoadOutcome> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("ページ {} を取得中...", page));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = view.navigate(loader, page).await;
    spinner.finish_and_clear();

    let outcome = outcome?;
    if outcome == LoadOutcome::Failed {
        println!("⚠ ページ {} の取得に失敗しました（表示は前のまま）", page);
    }
    Ok(outcome)
}

/// 対話式でブラウズ
pub async fn run_browse<L: PageLoader>(loader: &L, start_page: u32) -> Result<()> {
    if start_page == 0 {
        return Err(ArtworkTableError::InvalidPage(start_page));
    }

    let mut view = ViewState::new();
    load_with_spinner(&mut view, loader, start_page).await?;

    println!("{}", HELP);

    loop {
        println!("\n{}\n", render_view(&view));

        let action = prompt_browse_action()?;
        let paginator = view.paginator();

        match action {
            BrowseAction::Next => match paginator.next() {
                Some(page) => {
                    load_with_spinner(&mut view, loader, page).await?;
                }
                None => println!("  → 最後のページです"),
            },
            BrowseAction::Previous => match paginator.previous() {
                Some(page) => {
                    load_with_spinner(&mut view, loader, page).await?;
                }
                None => println!("  → 最初のページです"),
            },
            BrowseAction::First => {
                load_with_spinner(&mut view, loader, 1).await?;
            }
            BrowseAction::Last => {
                load_with_spinner(&mut view, loader, paginator.last()).await?;
            }
            BrowseAction::Goto(page) => {
                load_with_spinner(&mut view, loader, page).await?;
            }
            BrowseAction::Reload => {
                let page = view.page();
                load_with_spinner(&mut view, loader, page).await?;
            }
            BrowseAction::Toggle(numbers) => {
                let ids = row_numbers_to_ids(&view, &numbers);
                if ids.is_empty() {
                    println!("  → 該当する行がありません");
                }
                for id in ids {
                    view.toggle_row(id);
                }
            }
            BrowseAction::Edit => {
                if let Some(selected) = prompt_page_selection(&view)? {
                    view.set_page_selection(selected);
                }
            }
            BrowseAction::SelectPage => view.set_page_all(true),
            BrowseAction::ClearPage => view.set_page_all(false),
            BrowseAction::Bulk(value) => match view.submit_bulk(&value) {
                Ok(n) => println!("  → 先頭{}件を選択", n),
                Err(_) => println!("  → 1以上の数値を入力してください"),
            },
            BrowseAction::Help => println!("{}", HELP),
            BrowseAction::Quit => {
                println!("{}", view.selected_label());
                break;
            }
            BrowseAction::Unknown(input) => {
                println!("  → 不明な操作: {}", input);
                println!("{}", HELP);
            }
        }
    }

    Ok(())
}

fn prompt_browse_action() -> Result<BrowseAction> {
    let input: String = Input::new()
        .with_prompt("操作")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ArtworkTableError::Prompt(e.to_string()))?;

    Ok(parse_browse_command(&input))
}

/// 現在ページの選択をチェックボックスで編集
///
/// 確定した選択（ページ全体の新しい選択内容）を返す。行が無ければ None。
fn prompt_page_selection(view: &ViewState) -> Result<Option<Vec<ArtworkId>>> {
    let rows = view.rows();
    if rows.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = rows
        .iter()
        .map(|r| format!("{} {}", r.artwork.id, r.artwork.cell(artwork_table_common::Column::Title)))
        .collect();
    let defaults: Vec<bool> = rows.iter().map(|r| r.selected).collect();

    let chosen = MultiSelect::new()
        .with_prompt("選択する行（スペースで切替、Enterで確定）")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .map_err(|e| ArtworkTableError::Prompt(e.to_string()))?;

    Ok(Some(chosen.into_iter().map(|i| rows[i].artwork.id).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use artwork_table_common::{Artwork, ArtworkPage};

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_browse_command("n"), BrowseAction::Next);
        assert_eq!(parse_browse_command(""), BrowseAction::Next);
        assert_eq!(parse_browse_command(" p "), BrowseAction::Previous);
        assert_eq!(parse_browse_command("f"), BrowseAction::First);
        assert_eq!(parse_browse_command("l"), BrowseAction::Last);
        assert_eq!(parse_browse_command("g 12"), BrowseAction::Goto(12));
        assert_eq!(parse_browse_command("r"), BrowseAction::Reload);
    }

    #[test]
    fn test_parse_goto_rejects_zero_and_garbage() {
        assert_eq!(parse_browse_command("g 0"), BrowseAction::Unknown("g 0".into()));
        assert_eq!(parse_browse_command("g x"), BrowseAction::Unknown("g x".into()));
        assert_eq!(parse_browse_command("g"), BrowseAction::Unknown("g".into()));
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(parse_browse_command("t 3 7"), BrowseAction::Toggle(vec![3, 7]));
        assert_eq!(parse_browse_command("t 1,2, 4"), BrowseAction::Toggle(vec![1, 2, 4]));
        assert_eq!(parse_browse_command("t 0"), BrowseAction::Unknown("t 0".into()));
        assert_eq!(parse_browse_command("t"), BrowseAction::Unknown("t".into()));
    }

    #[test]
    fn test_parse_bulk_keeps_raw_value() {
        assert_eq!(parse_browse_command("b 15"), BrowseAction::Bulk("15".into()));
        assert_eq!(parse_browse_command("b"), BrowseAction::Bulk("".into()));
        assert_eq!(parse_browse_command("b -2"), BrowseAction::Bulk("-2".into()));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_browse_command("e"), BrowseAction::Edit);
        assert_eq!(parse_browse_command("a"), BrowseAction::SelectPage);
        assert_eq!(parse_browse_command("c"), BrowseAction::ClearPage);
        assert_eq!(parse_browse_command("?"), BrowseAction::Help);
        assert_eq!(parse_browse_command("q"), BrowseAction::Quit);
        assert_eq!(parse_browse_command("zzz"), BrowseAction::Unknown("zzz".into()));
    }

    #[test]
    fn test_row_numbers_to_ids() {
        let mut view = ViewState::new();
        let request = view.begin_load(1).unwrap();
        let records = (1..=3).map(|id| Artwork { id: id * 10, ..Default::default() }).collect();
        view.finish_load(request, Ok(ArtworkPage::new(1, records, 3)));

        assert_eq!(row_numbers_to_ids(&view, &[1, 3, 4]), vec![10, 30]);
        assert!(row_numbers_to_ids(&view, &[0]).is_empty());
    }
}
