//! To-Do Frontend App
//!
//! List page: loads entries from the server and renders a row per item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NoticeBanner, TodoRow};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::rows::RowStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx.clone());

    let store = RowStore::new();
    let (loading, set_loading) = signal(true);

    // Load rows on mount
    let load_ctx = ctx.clone();
    Effect::new(move |_| {
        let ctx = load_ctx.clone();
        spawn_local(async move {
            match ctx.actions.list_items().await {
                Ok(items) => {
                    log::info!("[APP] Loaded {} items", items.len());
                    store.rows.set(items);
                }
                Err(e) => {
                    log::error!("[APP] Loading items failed: {}", e);
                    ctx.notify(format!("Could not load the list: {}", e));
                }
            }
            set_loading.set(false);
        });
    });

    let new_ctx = ctx.clone();
    let open_new = move |_: web_sys::MouseEvent| {
        if let Err(e) = new_ctx.actions.new_item() {
            new_ctx.notify(e.to_string());
        }
    };

    view! {
        <div class="todo-app">
            <NoticeBanner />

            <header class="todo-header">
                <h1>"To-Do List"</h1>
                <button class="new-btn" on:click=open_new>"New"</button>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="todo-list">
                    <For
                        each=move || store.rows.get()
                        key=|item| item.id
                        children=move |item| view! { <TodoRow item=item store=store /> }
                    />
                </ul>
            </Show>

            <p class="item-count">{move || format!("{} items", store.rows.with(|rows| rows.len()))}</p>
        </div>
    }
}
