//! Page-number navigation for paginated listings.

use leptos::prelude::*;

use crate::state::bundles::{needs_pagination, page_window};

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] last: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| {
        let page = page.clamp(1, last.get_untracked().max(1));
        if page != current.get_untracked() {
            on_select.run(page);
        }
    };

    view! {
        <Show when=move || needs_pagination(last.get())>
            <nav class="pagination">
                <button
                    class="btn pagination__step"
                    disabled=move || current.get() <= 1
                    on:click=move |_| go(current.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    page_window(current.get(), last.get())
                        .into_iter()
                        .map(|page| {
                            let class = if page == current.get() {
                                "btn pagination__page pagination__page--active"
                            } else {
                                "btn pagination__page"
                            };
                            view! { <button class=class on:click=move |_| go(page)>{page}</button> }
                        })
                        .collect_view()
                }}
                <button
                    class="btn pagination__step"
                    disabled=move || current.get() >= last.get()
                    on:click=move |_| go(current.get_untracked() + 1)
                >
                    "Next"
                </button>
                <span class="pagination__summary">
                    {move || format!("Page {} of {}", current.get(), last.get())}
                </span>
            </nav>
        </Show>
    }
}
