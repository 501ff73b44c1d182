use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::dataset::PageSize;
use crate::domain::entities::export::ExportFormat;
use crate::domain::entities::notice::NoticeId;
use crate::domain::entities::record::RecordId;
use crate::ui::format::{
    export_button_label, format_cell, header_checkbox_aria, header_checkbox_script,
    notice_style, page_label, page_size_label, parse_goto_input, row_style, selection_summary,
    sort_indicator, table_container_style, table_header_cell_style, HEADER_CHECKBOX_ID,
};
use crate::ui::services::AppServices;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::provider::DataProvider;
use crate::usecase::services::export_service::{run_export, ExportStart};
use crate::usecase::services::notices::Notices;
use crate::usecase::services::view_state::{LoadState, ViewStateController};

#[derive(Clone, Debug, PartialEq)]
struct RowView {
    id: RecordId,
    key: String,
    cells: Vec<String>,
    selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct HeaderView {
    key: String,
    title: String,
}

async fn load_products(
    mut view: Signal<ViewStateController>,
    mut notices: Signal<Notices>,
    provider: Arc<dyn DataProvider>,
) {
    let ticket = view.write().begin_fetch();
    let result = provider.fetch_records().await;
    view.write()
        .complete_fetch(ticket, result, &mut notices.write());
}

#[component]
pub fn App() -> Element {
    let services = use_context::<AppServices>();

    let AppState {
        mut view,
        mut exports,
        mut notices,
        mut goto_input,
    } = AppState::new(&services.config);

    let provider = services.provider.clone();
    let reload = use_callback(move |_: ()| {
        goto_input.set("1".to_string());
        spawn(load_products(view, notices, provider.clone()));
    });
    use_hook(move || reload.call(()));

    let services_for_export = services.clone();
    let start_export = use_callback(move |format: ExportFormat| {
        let start = exports
            .write()
            .begin(format, &view.read(), &mut notices.write());
        let ExportStart::Started(job) = start else {
            return;
        };
        let renderer = services_for_export.renderer_for(&view.read());
        let sink = services_for_export.sink.clone();
        spawn(async move {
            let outcome = run_export(&job.request, renderer.as_ref(), sink.as_ref()).await;
            exports
                .write()
                .finish(job.ticket, outcome, &mut notices.write());
        });
    });

    let (headers, rows, load_state, page_index, page_count, page_size, summary) = {
        let state = view.read();
        let headers: Vec<HeaderView> = state
            .columns()
            .iter()
            .map(|column| HeaderView {
                key: column.key.clone(),
                title: format!(
                    "{}{}",
                    column.header,
                    sort_indicator(state.sort(), &column.key)
                ),
            })
            .collect();
        let rows: Vec<RowView> = state
            .visible_page()
            .into_iter()
            .map(|record| RowView {
                id: record.id().clone(),
                key: record.id().to_string(),
                cells: state
                    .columns()
                    .iter()
                    .map(|column| format_cell(record.get(&column.key)))
                    .collect(),
                selected: state.is_selected(record.id()),
            })
            .collect();
        (
            headers,
            rows,
            state.load_state().clone(),
            state.page_index(),
            state.page_count(),
            state.page_size(),
            selection_summary(state.selected_count(), state.total_rows()),
        )
    };
    let page_fully_selected = view.read().is_page_fully_selected();
    let page_partially_selected = view.read().is_page_partially_selected();
    let can_previous = view.read().can_previous_page();
    let can_next = view.read().can_next_page();
    let export_pending = exports.read().is_pending();
    let header_checkbox_state = header_checkbox_aria(page_fully_selected, page_partially_selected);

    use_effect(move || {
        let partial = view.read().is_page_partially_selected();
        let _ = document::eval(&header_checkbox_script(partial));
    });
    let page_text = page_label(page_index, page_count);
    let page_size_value = page_size.rows().to_string();
    let page_size_options: Vec<(String, String)> = PageSize::ALL
        .into_iter()
        .map(|size| (size.rows().to_string(), page_size_label(size)))
        .collect();
    let export_buttons: Vec<(ExportFormat, String)> = ExportFormat::ALL
        .into_iter()
        .map(|format| (format, export_button_label(format)))
        .collect();
    let notice_items: Vec<(NoticeId, String, String, String)> = notices
        .read()
        .iter()
        .map(|notice| {
            (
                notice.id,
                notice.id.0.to_string(),
                notice_style(notice.level).to_string(),
                format!("{} {}", notice.raised_at.format("%H:%M:%S"), notice.message),
            )
        })
        .collect();
    let empty_message = match &load_state {
        LoadState::Idle | LoadState::Loading => Some("Loading products…"),
        LoadState::Failed(_) => Some("Could not load products."),
        LoadState::Ready if rows.is_empty() => Some("No products."),
        LoadState::Ready => None,
    };
    let column_count = headers.len() + 1;

    rsx! {
        div {
            style: "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 12px; box-sizing: border-box; gap: 8px;",
            h1 { "Product Inventory" }

            if !notice_items.is_empty() {
                div { style: "display: flex; flex-direction: column; gap: 4px;",
                    for (id, key, style, message) in notice_items {
                        div {
                            key: "{key}",
                            style: "{style} padding: 6px 10px; border-radius: 6px; display: flex; justify-content: space-between;",
                            span { "{message}" }
                            button {
                                style: "border: none; background: transparent; cursor: pointer;",
                                onclick: move |_| {
                                    notices.write().dismiss(id);
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div { style: "display: flex; gap: 8px; align-items: center;",
                button {
                    disabled: load_state == LoadState::Loading,
                    onclick: move |_| reload.call(()),
                    "Reload"
                }
                span { "{summary}" }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style(false)}",
                                input {
                                    r#type: "checkbox",
                                    id: HEADER_CHECKBOX_ID,
                                    aria_checked: header_checkbox_state,
                                    checked: page_fully_selected,
                                    onclick: move |_| {
                                        view.write().toggle_all(true);
                                    }
                                }
                            }
                            {headers.into_iter().map(|header| {
                                let sort_key = header.key.clone();
                                rsx!(
                                    th {
                                        key: "{header.key}",
                                        style: "{table_header_cell_style(true)}",
                                        onclick: move |_| {
                                            view.write().set_sort(&sort_key);
                                            goto_input.set("1".to_string());
                                        },
                                        "{header.title}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if let Some(message) = empty_message {
                            tr {
                                td { colspan: "{column_count}", style: "padding: 12px; color: #666;", "{message}" }
                            }
                        }
                        {rows.into_iter().map(|row| {
                            let style = row_style(row.selected);
                            let id = row.id.clone();
                            rsx!(
                                tr {
                                    key: "{row.key}",
                                    style: "{style}",
                                    td { style: "border: 1px solid #bbb; padding: 4px; text-align: center;",
                                        input {
                                            r#type: "checkbox",
                                            checked: row.selected,
                                            onclick: move |_| {
                                                view.write().toggle(&id);
                                            }
                                        }
                                    }
                                    for cell in row.cells {
                                        td { style: "border: 1px solid #bbb; padding: 4px;", "{cell}" }
                                    }
                                }
                            )
                        })}
                    }
                }
            }

            div { style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                button {
                    disabled: !can_previous,
                    onclick: move |_| {
                        let idx = view.write().first_page();
                        goto_input.set((idx + 1).to_string());
                    },
                    "<<"
                }
                button {
                    disabled: !can_previous,
                    onclick: move |_| {
                        let idx = view.write().previous_page();
                        goto_input.set((idx + 1).to_string());
                    },
                    "<"
                }
                button {
                    disabled: !can_next,
                    onclick: move |_| {
                        let idx = view.write().next_page();
                        goto_input.set((idx + 1).to_string());
                    },
                    ">"
                }
                button {
                    disabled: !can_next,
                    onclick: move |_| {
                        let idx = view.write().last_page();
                        goto_input.set((idx + 1).to_string());
                    },
                    ">>"
                }
                span { strong { "{page_text}" } }
                span { "| Go to page: " }
                input {
                    r#type: "number",
                    style: "width: 64px;",
                    value: "{goto_input}",
                    oninput: move |event| {
                        let text = event.value();
                        if let Some(target) = parse_goto_input(&text) {
                            view.write().goto_page(target);
                        }
                        goto_input.set(text);
                    }
                }
                select {
                    value: "{page_size_value}",
                    onchange: move |event| {
                        let Ok(rows) = event.value().parse::<usize>() else {
                            return;
                        };
                        let mut state = view.write();
                        if state.set_page_size(rows) {
                            goto_input.set((state.page_index() + 1).to_string());
                        }
                    },
                    for (value, label) in page_size_options {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }

            div { style: "display: flex; gap: 8px;",
                for (format, label) in export_buttons {
                    button {
                        key: "{format}",
                        disabled: export_pending,
                        onclick: move |_| start_export.call(format),
                        "{label}"
                    }
                }
            }
        }
    }
}
