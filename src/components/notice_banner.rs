//! Notice Banner Component
//!
//! Shows the current failure notice from the app context.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = ctx.notice;

    view! {
        <Show when=move || notice.with(|n| n.is_some())>
            <div class="notice" role="alert">
                <span class="notice-text">{move || notice.get().unwrap_or_default()}</span>
                <button class="notice-close" on:click=move |_| notice.set(None)>"×"</button>
            </div>
        </Show>
    }
}
