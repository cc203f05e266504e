//! Pagination Bar Component
//!
//! Previous / numbered-with-ellipsis / Next controls, driven entirely by
//! a `ListSignals` bundle. One implementation for every table screen.

use leptos::prelude::*;
use leptos_listview::{page_labels, ListSignals, PageLabel};

/// Pagination bar; renders nothing while there is at most one page
#[component]
pub fn Pagination(list: ListSignals, total_pages: Signal<usize>) -> impl IntoView {
    let current = list.page_read;

    view! {
        <Show when={move || total_pages.get() > 1}>
            <nav class="d-flex justify-content-center mt-3">
                <div class="pagination-bar">
                    <button
                        class="btn btn-light mx-1"
                        disabled=move || current.get() == 1
                        on:click=move |_| list.prev_page(total_pages.get())
                    >
                        "Previous"
                    </button>

                    <For
                        each=move || {
                            page_labels(total_pages.get(), current.get())
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(index, label)| (*index, *label)
                        children=move |(_, label)| match label {
                            PageLabel::Page(page) => view! {
                                <button
                                    class=move || {
                                        if current.get() == page {
                                            "btn btn-primary mx-1"
                                        } else {
                                            "btn btn-light mx-1"
                                        }
                                    }
                                    on:click=move |_| list.set_page(page, total_pages.get())
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageLabel::Ellipsis => view! {
                                <span class="btn btn-light mx-1 disabled">"..."</span>
                            }
                            .into_any(),
                        }
                    />

                    <button
                        class="btn btn-light mx-1"
                        disabled=move || current.get() >= total_pages.get()
                        on:click=move |_| list.next_page(total_pages.get())
                    >
                        "Next"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
