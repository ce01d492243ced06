//! Todo Row Component
//!
//! One entry of the list with edit, detail and delete actions.

use item_actions::TodoItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::rows::RowStore;

#[component]
pub fn TodoRow(item: TodoItem, store: RowStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.item_id();
    let dom_id = format!("item-{}", id);
    let title = item.title.clone();
    let description = item.description.clone();
    let row_class = if item.done { "todo-row done" } else { "todo-row" };

    let open_detail = {
        let ctx = ctx.clone();
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            if let Err(e) = ctx.actions.goto_detail(&id) {
                ctx.notify(e.to_string());
            }
        }
    };

    let open_edit = {
        let ctx = ctx.clone();
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            if let Err(e) = ctx.actions.edit_item(&id) {
                ctx.notify(e.to_string());
            }
        }
    };

    let on_delete = {
        let title = title.clone();
        Callback::new(move |_: ()| {
            let ctx = ctx.clone();
            let id = id.clone();
            let title = title.clone();
            spawn_local(async move {
                if let Err(e) = ctx.actions.delete_item(&id, &store).await {
                    ctx.notify(format!("Could not delete \"{}\": {}", title, e));
                }
            });
        })
    };

    view! {
        <li id=dom_id class=row_class>
            <span class="todo-title" on:click=open_detail>{title}</span>
            {(!description.is_empty()).then(|| view! {
                <span class="todo-description">{description}</span>
            })}
            <button class="edit-btn" on:click=open_edit>"Edit"</button>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}
