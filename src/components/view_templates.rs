//! View Templates Screen
//!
//! Template marketplace table with a detail modal, edit navigation and
//! delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::api;
use crate::components::{input_value, DeleteConfirmButton, Pagination};
use crate::context::{AppContext, Screen, ToastKind};
use crate::models::Template;

const PAGE_SIZE: usize = 6;

fn price_text(template: &Template) -> String {
    match &template.price {
        Some(serde_json::Value::Number(n)) => format!("₹{n}"),
        Some(serde_json::Value::String(s)) if !s.is_empty() => format!("₹{s}"),
        _ => "Free".to_string(),
    }
}

#[component]
pub fn ViewTemplates() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (templates, set_templates) = signal(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(None::<Template>);
    let list = create_list_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_templates().await {
                Ok(loaded) => {
                    set_templates.set(loaded);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching templates: {e}").into());
                    set_error.set(Some("Failed to fetch templates".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&templates.get(), &list.search_read.get(), |template| {
            vec![template.template_name.clone()]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    let view_template = move |id: u32| {
        spawn_local(async move {
            match api::fetch_template(id).await {
                Ok(template) => set_selected.set(Some(template)),
                Err(e) => ctx.show_toast(
                    e.user_message("Failed to fetch template details"),
                    ToastKind::Error,
                ),
            }
        });
    };

    let delete_template = move |id: u32| {
        spawn_local(async move {
            match api::delete_template(id).await {
                Ok(()) => {
                    set_templates.update(|templates| templates.retain(|t| t.id != id));
                    ctx.show_toast("Template deleted", ToastKind::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting template: {e}").into());
                    ctx.show_toast(e.user_message("Failed to delete template"), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="screen view-templates">
            <h4>"Manage Templates"</h4>

            <div class="list-toolbar">
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search Templates"
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <p>"Loading templates..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="table table-bordered">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Template Name"</th>
                            <th>"Price"</th>
                            <th>"View"</th>
                            <th>"Edit"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr><td colspan="6" class="text-center">"No templates found"</td></tr>
                            }
                        >
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, template)| template.id
                                children=move |(row, template)| {
                                    let id = template.id;
                                    let price = price_text(&template);
                                    view! {
                                        <tr>
                                            <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                            <td>{template.template_name.clone()}</td>
                                            <td>{price}</td>
                                            <td>
                                                <button class="btn btn-info" on:click=move |_| view_template(id)>
                                                    "View"
                                                </button>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| ctx.navigate(Screen::EditTemplate(id))
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-danger"
                                                    on_confirm=Callback::new(move |_| delete_template(id))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>

                <Pagination list=list total_pages=pages/>
            </Show>

            {move || selected.get().map(|template| {
                let records = api::parse_file_records(&template);
                view! {
                    <div class="modal-backdrop">
                        <div class="modal-dialog">
                            <div class="modal-header">
                                <h5>{template.template_name.clone()}</h5>
                                <button class="btn-close" on:click=move |_| set_selected.set(None)>
                                    "×"
                                </button>
                            </div>
                            <div class="modal-body">
                                {template.cover_image.clone().map(|path| view! {
                                    <img
                                        class="template-cover"
                                        src=api::asset_url(&path)
                                        alt="Template cover"
                                    />
                                })}
                                <p>{template.description.clone().unwrap_or_default()}</p>
                                <p><strong>"Price: "</strong>{price_text(&template)}</p>
                                <p><strong>"Files: "</strong>{records.len()}</p>
                                <ul>
                                    {records
                                        .iter()
                                        .map(|record| view! {
                                            <li>
                                                {record
                                                    .filename
                                                    .clone()
                                                    .or_else(|| record.path.clone())
                                                    .unwrap_or_else(|| "file".to_string())}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
