//! Sub Categories Screen
//!
//! Subcategory table with inline add form (a subcategory hangs off a
//! parent category picked from the shared cache).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::api;
use crate::components::{input_value, select_value, DeleteConfirmButton, Pagination};
use crate::context::{AppContext, ToastKind};
use crate::store::{store_set_categories, store_set_sub_categories, use_app_store, AppStateStoreFields};

const PAGE_SIZE: usize = 10;

#[component]
pub fn SubCategories() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (new_name, set_new_name) = signal(String::new());
    let (new_parent, set_new_parent) = signal(String::new());
    let list = create_list_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sub_categories().await {
                Ok(loaded) => {
                    store_set_sub_categories(&store, loaded);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching sub categories: {e}").into(),
                    );
                    set_error.set(Some(
                        "Failed to load subcategories. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    // Parent picker options; a failed fetch just leaves the select empty
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(loaded) => store_set_categories(&store, loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching categories: {e}").into());
                }
            }
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&store.sub_categories().get(), &list.search_read.get(), |sub| {
            vec![sub.sub_category.clone()]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    let add_sub_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        let parent = new_parent.get();
        if name.is_empty() || parent.is_empty() {
            ctx.show_toast("Pick a parent category and a name", ToastKind::Error);
            return;
        }
        spawn_local(async move {
            match api::create_sub_category(&name, &parent).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    ctx.show_toast("Sub category created", ToastKind::Success);
                    ctx.reload();
                }
                Err(e) => ctx.show_toast(
                    e.user_message("Failed to create sub category"),
                    ToastKind::Error,
                ),
            }
        });
    };

    let delete_sub_category = move |id: u32| {
        spawn_local(async move {
            match api::delete_sub_category(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting sub category: {e}").into());
                    ctx.show_toast(
                        e.user_message("Failed to delete sub category. Please try again."),
                        ToastKind::Error,
                    );
                }
            }
        });
    };

    view! {
        <div class="screen sub-categories">
            <h4>"Manage Sub Categories"</h4>

            <form class="inline-add-form" on:submit=add_sub_category>
                <select
                    class="form-select"
                    prop:value=move || new_parent.get()
                    on:change=move |ev| set_new_parent.set(select_value(&ev))
                >
                    <option value="" disabled selected>"Select Category"</option>
                    <For
                        each=move || store.categories().get()
                        key=|category| category.cid
                        children=|category| view! {
                            <option value=category.category_name.clone()>
                                {category.category_name.clone()}
                            </option>
                        }
                    />
                </select>
                <input
                    type="text"
                    class="form-control"
                    placeholder="New sub category name..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(input_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add Sub Category"</button>
            </form>

            <div class="list-toolbar">
                <span class="badge">{move || filtered.get().len()}</span>
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search subcategories..."
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <p>"Loading subcategories data..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="table table-bordered">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Sub Category"</th>
                            <th>"Parent"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr><td colspan="4" class="text-center">"No subcategories found"</td></tr>
                            }
                        >
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, sub)| sub.id
                                children=move |(row, sub)| {
                                    let id = sub.id;
                                    view! {
                                        <tr>
                                            <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                            <td>{sub.sub_category.clone()}</td>
                                            <td>{sub.parent_category.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-danger btn-sm"
                                                    on_confirm=Callback::new(move |_| delete_sub_category(id))
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
        </div>
    }
}
