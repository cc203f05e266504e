//! Main Categories Screen
//!
//! Category table with inline add form; deletes refetch the list (the
//! course forms read the same store-backed cache).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::api;
use crate::components::{input_value, DeleteConfirmButton, Pagination};
use crate::context::{AppContext, ToastKind};
use crate::store::{store_set_categories, use_app_store, AppStateStoreFields};

const PAGE_SIZE: usize = 10;

#[component]
pub fn MainCategories() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (new_name, set_new_name) = signal(String::new());
    let list = create_list_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(loaded) => {
                    store_set_categories(&store, loaded);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching categories: {e}").into());
                    set_error.set(Some("Failed to load categories. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&store.categories().get(), &list.search_read.get(), |category| {
            vec![category.category_name.clone()]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create_category(&name).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    ctx.show_toast("Category created", ToastKind::Success);
                    ctx.reload();
                }
                Err(e) => {
                    ctx.show_toast(e.user_message("Failed to create category"), ToastKind::Error)
                }
            }
        });
    };

    let delete_category = move |id: u32| {
        spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting category: {e}").into());
                    ctx.show_toast(
                        e.user_message("Failed to delete category. Please try again."),
                        ToastKind::Error,
                    );
                }
            }
        });
    };

    view! {
        <div class="screen main-categories">
            <h4>"Manage Categories"</h4>

            <form class="inline-add-form" on:submit=add_category>
                <input
                    type="text"
                    class="form-control"
                    placeholder="New category name..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(input_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add Category"</button>
            </form>

            <div class="list-toolbar">
                <span class="badge">{move || filtered.get().len()}</span>
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search categories..."
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <p>"Loading categories data..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="table table-bordered">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Category"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr><td colspan="3" class="text-center">"No categories found"</td></tr>
                            }
                        >
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, category)| category.cid
                                children=move |(row, category)| {
                                    let cid = category.cid;
                                    view! {
                                        <tr>
                                            <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                            <td>{category.category_name.clone()}</td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-danger btn-sm"
                                                    on_confirm=Callback::new(move |_| delete_category(cid))
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
