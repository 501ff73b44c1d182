//! Presentation helpers shared by the desktop shell. Kept free of any UI
//! framework types so they can be tested on their own.

use crate::domain::entities::dataset::{PageSize, SortDirection, SortState};
use crate::domain::entities::export::ExportFormat;
use crate::domain::entities::notice::NoticeLevel;
use crate::domain::entities::record::FieldValue;

pub fn sort_indicator(sort: &SortState, column_key: &str) -> &'static str {
    match sort.direction_for(column_key) {
        Some(SortDirection::Asc) => " 🔼",
        Some(SortDirection::Desc) => " 🔽",
        None => "",
    }
}

pub fn page_label(page_index: usize, page_count: usize) -> String {
    format!("Page {} of {}", page_index + 1, page_count.max(1))
}

/// Parses the one-based "go to page" input into a zero-based page index.
/// An empty input means the first page; anything non-numeric is ignored.
pub fn parse_goto_input(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    text.parse::<i64>().ok().map(|page| page.saturating_sub(1))
}

pub fn format_cell(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Float(number)) if number.fract() == 0.0 && number.is_finite() => {
            format!("{number:.0}")
        }
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

pub const HEADER_CHECKBOX_ID: &str = "select-page";

/// `aria-checked` for the page checkbox.
pub fn header_checkbox_aria(fully_selected: bool, partially_selected: bool) -> &'static str {
    if partially_selected {
        "mixed"
    } else if fully_selected {
        "true"
    } else {
        "false"
    }
}

/// `indeterminate` is a DOM property with no HTML attribute, so it is set by script.
pub fn header_checkbox_script(partially_selected: bool) -> String {
    format!(
        "const box = document.getElementById(\"{HEADER_CHECKBOX_ID}\"); \
         if (box) {{ box.indeterminate = {partially_selected}; }}"
    )
}

pub fn page_size_label(page_size: PageSize) -> String {
    format!("Show {}", page_size.rows())
}

pub fn export_button_label(format: ExportFormat) -> String {
    format!("Export as {}", format.label())
}

pub fn selection_summary(selected: usize, total: usize) -> String {
    if selected == 0 {
        String::new()
    } else {
        format!("{selected} of {total} selected")
    }
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ccc;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f4f4f4; border: 1px solid #bbb; padding: 6px; text-align: left;{}",
        if sortable { " cursor: pointer; user-select: none;" } else { "" }
    )
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff;"
    } else {
        ""
    }
}

pub fn notice_style(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "background: #eef4ff; border: 1px solid #9bb7e0;",
        NoticeLevel::Success => "background: #eefbea; border: 1px solid #8cc67a;",
        NoticeLevel::Error => "background: #fdecec; border: 1px solid #d24;",
    }
}
