//! Admin Sidebar Component
//!
//! Grouped navigation; the active entry tracks the current screen
//! (edit screens highlight their parent list).

use leptos::prelude::*;

use crate::context::{AppContext, Screen};

/// Sidebar sections and their entries
const SECTIONS: &[(&str, &[(&str, Screen)])] = &[
    ("Overview", &[("Dashboard", Screen::Dashboard)]),
    ("Users", &[("Manage Users", Screen::ManageUsers)]),
    (
        "Categories",
        &[
            ("Main Categories", Screen::MainCategories),
            ("Sub Categories", Screen::SubCategories),
        ],
    ),
    (
        "Courses",
        &[
            ("View Courses", Screen::ViewCourses),
            ("Add Course", Screen::AddCourse),
        ],
    ),
    (
        "Templates",
        &[
            ("View Templates", Screen::ViewTemplates),
            ("Add Template", Screen::AddTemplate),
        ],
    ),
    (
        "Sales",
        &[
            ("Payments", Screen::ViewPayments),
            ("Course Orders", Screen::CourseOrders),
        ],
    ),
    (
        "Settings",
        &[
            ("Default Settings", Screen::DefaultSettings),
            ("Logo Management", Screen::LogoManagement),
        ],
    ),
];

/// Which entry to highlight for the current screen
fn active_entry(screen: Screen) -> Screen {
    match screen {
        Screen::EditCourse(_) => Screen::ViewCourses,
        Screen::EditTemplate(_) => Screen::ViewTemplates,
        Screen::ChangePassword | Screen::EditProfile => Screen::Dashboard,
        other => other,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <aside class="admin-sidebar">
            {SECTIONS
                .iter()
                .map(|(section, entries)| {
                    view! {
                        <div class="sidebar-section">
                            <div class="sidebar-heading">{*section}</div>
                            {entries
                                .iter()
                                .map(|(label, screen)| {
                                    let screen = *screen;
                                    let is_active =
                                        move || active_entry(ctx.screen.get()) == screen;
                                    view! {
                                        <button
                                            class=move || {
                                                if is_active() {
                                                    "sidebar-link active"
                                                } else {
                                                    "sidebar-link"
                                                }
                                            }
                                            on:click=move |_| ctx.navigate(screen)
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </aside>
    }
}
