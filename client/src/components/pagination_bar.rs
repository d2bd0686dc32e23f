//! Numbered pagination controls for the admin table.

use leptos::prelude::*;

use crate::state::listing::PageNumberPaging;
use crate::util::pagination::{PageItem, page_window};

/// Previous / numbered window / Next. All buttons are disabled while
/// `loading` is true.
#[component]
pub fn PaginationBar(
    #[prop(into)] paging: Signal<PageNumberPaging>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<u32>,
) -> impl IntoView {
    let previous = move || paging.with(PageNumberPaging::previous_page);
    let next = move || paging.with(PageNumberPaging::next_page);

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__step"
                disabled=move || loading.get() || previous().is_none()
                on:click=move |_| {
                    if let Some(page) = previous() {
                        on_select.run(page);
                    }
                }
            >
                "Previous"
            </button>
            {move || {
                let current = paging.with(|p| p.current_page);
                page_window(current, paging.with(PageNumberPaging::total_pages))
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class="btn pagination__page"
                                class:pagination__page--active=page == current
                                disabled=move || loading.get()
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! { <span class="pagination__ellipsis">"…"</span> }.into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pagination__step"
                disabled=move || loading.get() || next().is_none()
                on:click=move |_| {
                    if let Some(page) = next() {
                        on_select.run(page);
                    }
                }
            >
                "Next"
            </button>
        </nav>
    }
}
