//! Manage Users Screen
//!
//! Searchable, paginated user table with enrollment lookup and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::api;
use crate::components::{input_value, DeleteConfirmButton, Pagination};
use crate::context::{AppContext, ToastKind};
use crate::models::UserAccount;

const PAGE_SIZE: usize = 10;

#[component]
pub fn ManageUsers() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (users, set_users) = signal(Vec::<UserAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let list = create_list_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(loaded) => {
                    set_users.set(loaded);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch users: {e}").into());
                    set_error.set(Some("Failed to fetch users".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&users.get(), &list.search_read.get(), |user| {
            vec![
                user.username.clone().unwrap_or_default(),
                user.email.clone().unwrap_or_default(),
            ]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    let delete_user = move |uid: String| {
        spawn_local(async move {
            match api::delete_user(&uid).await {
                Ok(()) => {
                    set_users.update(|users| users.retain(|user| user.uid != uid));
                    ctx.show_toast("User deleted successfully", ToastKind::Success);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting user: {e}").into());
                    ctx.show_toast(e.user_message("Failed to delete user"), ToastKind::Error);
                }
            }
        });
    };

    let show_enrollment = move |uid: String| {
        spawn_local(async move {
            match api::check_enrollment(&uid).await {
                Ok(check) if check.enrolled => {
                    ctx.show_toast(
                        format!("User is enrolled in {} course(s)", check.courses.len()),
                        ToastKind::Success,
                    );
                }
                Ok(_) => ctx.show_toast("User has no enrollments", ToastKind::Success),
                Err(e) => {
                    ctx.show_toast(e.user_message("Failed to check enrollments"), ToastKind::Error)
                }
            }
        });
    };

    view! {
        <div class="screen manage-users">
            <h4>"Manage Users"</h4>

            <div class="list-toolbar">
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search Users"
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <p>"Loading users..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}

            <Show when=move || !loading.get() && error.get().is_none()>
                <table class="table table-bordered">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Enrollments"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr><td colspan="5" class="text-center">"No users found"</td></tr>
                            }
                        >
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, user)| user.uid.clone()
                                children=move |(row, user)| {
                                    let uid = user.uid.clone();
                                    let uid_for_delete = user.uid.clone();
                                    view! {
                                        <tr>
                                            <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                            <td>{user.username.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                            <td>{user.email.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                            <td>
                                                <button
                                                    class="btn btn-info btn-sm"
                                                    on:click=move |_| show_enrollment(uid.clone())
                                                >
                                                    "View"
                                                </button>
                                            </td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-danger btn-sm"
                                                    on_confirm=Callback::new(move |_| {
                                                        delete_user(uid_for_delete.clone())
                                                    })
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>

                <p class="list-summary">
                    {move || {
                        let total = filtered.get().len();
                        if total == 0 {
                            "Showing 0 users".to_string()
                        } else {
                            let start = first_index(list.page_read.get(), PAGE_SIZE);
                            let end = (start + PAGE_SIZE).min(total);
                            format!("Showing {} to {} of {} users", start + 1, end, total)
                        }
                    }}
                </p>

                <Pagination list=list total_pages=pages/>
            </Show>
        </div>
    }
}
