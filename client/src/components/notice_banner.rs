//! Inline replacement for toast notifications.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = n.class();
            view! {
                <p class=class role="status">
                    {n.text}
                </p>
            }
        })
    }
}
