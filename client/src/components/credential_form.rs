//! Email + password form bound to page-owned signals.
//!
//! The form only binds fields and forwards submit events. It never clears
//! the fields, so a failed attempt keeps what the user typed.

use leptos::prelude::*;
use portal::Role;

/// Label for the email field, e.g. `Faculty Email`.
#[must_use]
pub fn email_label(role: Role) -> String {
    format!("{} Email", role.label())
}

#[component]
pub fn CredentialForm<F>(
    #[prop(into)] role: Signal<Role>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + 'static,
{
    view! {
        <form class="login-form" on:submit=on_submit>
            <label class="login-label" for="email">{move || email_label(role.get())}</label>
            <input
                id="email"
                class="login-input"
                type="email"
                required
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label class="login-label" for="password">"Password"</label>
            <input
                id="password"
                class="login-input"
                type="password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <a class="login-link" href="/forget-password">"Forgot Password?"</a>
            <button class="login-button" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[cfg(test)]
#[path = "credential_form_test.rs"]
mod tests;
