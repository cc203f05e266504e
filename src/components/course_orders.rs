//! Course Orders Screen
//!
//! New-order table over static sample rows; searchable by order id,
//! instructor or student.

use leptos::prelude::*;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::components::{input_value, Pagination};
use crate::models::CourseOrder;

const PAGE_SIZE: usize = 5;

fn sample_orders() -> Vec<CourseOrder> {
    let rows = [
        (1, "65d97e1e546cb760930b8c6c", "Jackie", "Testing16", "Feb 24, 2024", "450 AUD"),
        (2, "65b642741be44b4b5072a4d2", "John Moffit", "Jackie", "Jan 28, 2024", "617.5 USD"),
        (3, "655b3a9c8e85330aa958c052", "Jackie", "John Moffit", "Nov 20, 2023", "237.5 USD"),
        (4, "655734aa7f42d84163179882", "Jackie", "John Moffit", "Nov 17, 2023", "427.5 AUD"),
        (5, "65321e94bc64036c6b778071", "John Moffit", "Appysa", "Oct 20, 2023", "237.5 USD"),
        (6, "65259d2d42102302e4475b2", "Appysa", "John Moffit", "Oct 11, 2023", "332.5 USD"),
        (7, "6421be9b5fbbed04fe6f3362", "John Moffit", "Jackie", "Mar 27, 2023", "285 USD"),
    ];
    rows.into_iter()
        .map(|(id, order, instructor, student, date, cost)| CourseOrder {
            id,
            order_id: order.to_string(),
            instructor_name: instructor.to_string(),
            student_name: student.to_string(),
            order_date: date.to_string(),
            order_cost: cost.to_string(),
        })
        .collect()
}

#[component]
pub fn CourseOrders() -> impl IntoView {
    let (orders, _) = signal(sample_orders());
    let list = create_list_signals();

    let filtered = Memo::new(move |_| {
        filter_items(&orders.get(), &list.search_read.get(), |order| {
            vec![
                order.order_id.clone(),
                order.instructor_name.clone(),
                order.student_name.clone(),
            ]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    view! {
        <div class="screen course-orders">
            <h4>"Course New Orders"</h4>

            <div class="list-toolbar">
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search Orders"
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <table class="table table-bordered">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Order ID"</th>
                        <th>"Instructor"</th>
                        <th>"Student"</th>
                        <th>"Date"</th>
                        <th>"Cost"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! {
                            <tr><td colspan="6" class="text-center">"No orders found"</td></tr>
                        }
                    >
                        <For
                            each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, order)| order.id
                            children=move |(row, order)| view! {
                                <tr>
                                    <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                    <td>{order.order_id.clone()}</td>
                                    <td>{order.instructor_name.clone()}</td>
                                    <td>{order.student_name.clone()}</td>
                                    <td>{order.order_date.clone()}</td>
                                    <td>{order.order_cost.clone()}</td>
                                </tr>
                            }
                        />
                    </Show>
                </tbody>
            </table>

            <Pagination list=list total_pages=pages/>
        </div>
    }
}
