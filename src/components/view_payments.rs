//! View Payments Screen
//!
//! Payment table over static sample rows (the payments API is not wired
//! up yet); search and pagination behave like every other table.

use leptos::prelude::*;
use leptos_listview::{create_list_signals, filter_items, first_index, page_slice, total_pages};

use crate::components::{input_value, Pagination};
use crate::models::Payment;

const PAGE_SIZE: usize = 3;

fn sample_payments() -> Vec<Payment> {
    let rows = [
        (1, "USR001", "SUB123", "CRS456", 299.99, "completed", "TXN789", "credit_card", "2024-02-20T10:30:00"),
        (2, "USR002", "SUB124", "CRS457", 199.99, "pending", "TXN790", "paypal", "2024-02-20T11:30:00"),
        (3, "USR003", "SUB125", "CRS458", 149.99, "completed", "TXN791", "credit_card", "2024-02-21T09:15:00"),
        (4, "USR004", "SUB126", "CRS459", 99.99, "failed", "TXN792", "bank_transfer", "2024-02-22T14:20:00"),
        (5, "USR005", "SUB127", "CRS460", 349.99, "completed", "TXN793", "paypal", "2024-02-23T16:45:00"),
    ];
    rows.into_iter()
        .map(
            |(id, user, sub, course, amount, status, txn, method, created)| Payment {
                id,
                user_id: user.to_string(),
                subscription_id: sub.to_string(),
                course_id: course.to_string(),
                amount,
                payment_status: status.to_string(),
                transaction_id: txn.to_string(),
                payment_method: method.to_string(),
                created_at: created.to_string(),
            },
        )
        .collect()
}

fn status_class(status: &str) -> &'static str {
    match status {
        "completed" => "badge bg-success",
        "pending" => "badge bg-warning",
        _ => "badge bg-danger",
    }
}

#[component]
pub fn ViewPayments() -> impl IntoView {
    let (payments, _) = signal(sample_payments());
    let list = create_list_signals();

    let filtered = Memo::new(move |_| {
        filter_items(&payments.get(), &list.search_read.get(), |payment| {
            vec![
                payment.user_id.clone(),
                payment.transaction_id.clone(),
                payment.payment_method.clone(),
            ]
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.get().len(), PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), list.page_read.get(), PAGE_SIZE));

    view! {
        <div class="screen view-payments">
            <h4>"View Payments"</h4>

            <div class="list-toolbar">
                <input
                    type="text"
                    class="form-control search-input"
                    placeholder="Search Payments"
                    prop:value=move || list.search_read.get()
                    on:input=move |ev| list.set_search_term(input_value(&ev))
                />
            </div>

            <table class="table table-bordered">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Course"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Transaction"</th>
                        <th>"Method"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! {
                            <tr><td colspan="8" class="text-center">"No payments found"</td></tr>
                        }
                    >
                        <For
                            each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, payment)| payment.id
                            children=move |(row, payment)| view! {
                                <tr>
                                    <td>{move || first_index(list.page_read.get(), PAGE_SIZE) + row + 1}</td>
                                    <td>{payment.user_id.clone()}</td>
                                    <td>{payment.course_id.clone()}</td>
                                    <td>{format!("{:.2}", payment.amount)}</td>
                                    <td>
                                        <span class=status_class(&payment.payment_status)>
                                            {payment.payment_status.clone()}
                                        </span>
                                    </td>
                                    <td>{payment.transaction_id.clone()}</td>
                                    <td>{payment.payment_method.clone()}</td>
                                    <td>{payment.created_at.clone()}</td>
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
