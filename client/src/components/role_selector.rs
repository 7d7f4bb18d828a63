//! Role tabs above the login form.

use leptos::prelude::*;
use portal::Role;

fn tab_class(active: bool) -> &'static str {
    if active { "role-tab role-tab--active" } else { "role-tab" }
}

/// One button per role; the selected one is highlighted.
#[component]
pub fn RoleSelector<F>(#[prop(into)] selected: Signal<Role>, on_select: F) -> impl IntoView
where
    F: Fn(Role) + Clone + 'static,
{
    let buttons = Role::ALL
        .into_iter()
        .map(|role| {
            let on_select = on_select.clone();
            view! {
                <button
                    type="button"
                    class=move || tab_class(selected.get() == role)
                    on:click=move |_| on_select(role)
                >
                    {role.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="role-selector">{buttons}</div> }
}
