//! Dashboard Screen
//!
//! Stat cards (users, courses, templates) plus the push-notification
//! broadcast form. Each counter fetch fails independently and just leaves
//! its card at zero.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{input_value, textarea_value};
use crate::context::{AppContext, ToastKind};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (total_users, set_total_users) = signal(0usize);
    let (total_courses, set_total_courses) = signal(0usize);
    let (total_templates, set_total_templates) = signal(0usize);
    let (title, set_title) = signal(String::new());
    let (message, set_message) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => set_total_users.set(users.len()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching total users: {e}").into());
                    set_total_users.set(0);
                }
            }
        });
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(courses) => set_total_courses.set(courses.len()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching courses: {e}").into());
                    set_total_courses.set(0);
                }
            }
        });
        spawn_local(async move {
            match api::fetch_templates().await {
                Ok(templates) => set_total_templates.set(templates.len()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching templates: {e}").into());
                    set_total_templates.set(0);
                }
            }
        });
    });

    let send_notification = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_title = title.get();
        let current_message = message.get();
        if current_title.is_empty() || current_message.is_empty() {
            ctx.show_toast("Please enter both title and message", ToastKind::Error);
            return;
        }
        spawn_local(async move {
            match api::send_notification(&current_title, &current_message).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_message.set(String::new());
                    ctx.show_toast("Notification sent successfully", ToastKind::Success);
                }
                Err(e) => {
                    ctx.show_toast(e.user_message("Failed to send notification"), ToastKind::Error)
                }
            }
        });
    };

    view! {
        <div class="screen dashboard">
            <h4>"Dashboard"</h4>

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{total_users}</span>
                    <span class="stat-label">"Total Users"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{total_courses}</span>
                    <span class="stat-label">"Courses"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{total_templates}</span>
                    <span class="stat-label">"Templates"</span>
                </div>
            </div>

            <div class="notification-form">
                <h5>"Send Notification"</h5>
                <form on:submit=send_notification>
                    <label class="form-label">"Title"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />

                    <label class="form-label">"Message"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(textarea_value(&ev))
                    ></textarea>

                    <button type="submit" class="btn btn-primary mt-2">"Send"</button>
                </form>
            </div>
        </div>
    }
}
