//! 端末向けテーブル描画

use artwork_table_common::{Column, PageCheckState, RowView, ViewState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 列ごとの最大表示幅（端末の桁数、全角は2桁）
const COLUMN_WIDTHS: [usize; 6] = [32, 16, 28, 20, 10, 10];

pub fn check_mark(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn header_mark(state: PageCheckState) -> &'static str {
    match state {
        PageCheckState::All => "[x]",
        PageCheckState::Some => "[-]",
        PageCheckState::None => "[ ]",
    }
}

/// 1セル分に整形（改行は空白に、長すぎる値は末尾を省略）
///
/// 幅は文字数ではなく表示桁数で数えるので、全角文字を含む行も揃う。
pub fn fit_cell(value: &str, width: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .collect();
    let text = if flat.width() > width {
        let budget = width.saturating_sub(1);
        let mut used = 0;
        let mut truncated = String::new();
        for c in flat.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            truncated.push(c);
        }
        if width > 0 {
            truncated.push('…');
        }
        truncated
    } else {
        flat
    };
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// `number` はページ内の1始まりの行番号
fn row_line(number: usize, row: &RowView) -> String {
    let cells: Vec<String> = Column::ALL
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(column, width)| fit_cell(&row.artwork.cell(*column), width))
        .collect();
    format!(
        "{} {:>6} {:>8}  {}",
        check_mark(row.selected),
        number,
        row.artwork.id,
        cells.join("  ")
    )
}

/// ビュー全体を文字列で描画
pub fn render_view(view: &ViewState) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} ▾", view.selected_label()));

    let headers: Vec<String> = Column::ALL
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(column, width)| fit_cell(column.header(), width))
        .collect();
    lines.push(format!(
        "{} {:>6} {:>8}  {}",
        header_mark(view.page_check_state()),
        "ROW",
        "ID",
        headers.join("  ")
    ));

    let rows = view.rows();
    if rows.is_empty() {
        lines.push("  (no records)".to_string());
    }
    for (pos, row) in rows.iter().enumerate() {
        lines.push(row_line(pos + 1, row));
    }

    let paginator = view.paginator();
    let links: Vec<String> = paginator
        .links()
        .iter()
        .map(|p| if *p == view.page() { format!("[{}]", p) } else { p.to_string() })
        .collect();
    lines.push(format!("{}   « ‹ {} › »", paginator.report(), links.join(" ")));

    lines.join("\n")
}
