//! Login page gating entry to the admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Applies the login-view session policy: a still-valid session skips the
//! form and lands on the dashboard. A successful submit records the token
//! and login time through the same store and clock the guards read.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_query_map;

use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::guard::{Verdict, evaluate, login_verdict};
use crate::util::session::{BrowserSessionStore, now_ms};
#[cfg(feature = "hydrate")]
use crate::util::guard::post_login_target;
#[cfg(feature = "hydrate")]
use crate::util::session::SessionStore;

fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let query = use_query_map();

    // A valid session skips the form entirely.
    let redirect_navigate = navigate.clone();
    Effect::new(move || {
        if let Verdict::Redirect(target) = login_verdict(evaluate(&BrowserSessionStore, now_ms()))
        {
            redirect_navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let from = query.get_untracked().get("from");
            leptos::task::spawn_local(async move {
                let (email_value, password_value) = credentials;
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => {
                        BrowserSessionStore.set(&token, now_ms());
                        show_toast(toasts, ToastKind::Success, "Login successful");
                        gloo_timers::future::TimeoutFuture::new(super::REDIRECT_DELAY_MS).await;
                        navigate(
                            &post_login_target(from.as_deref()),
                            NavigateOptions {
                                replace: true,
                                ..NavigateOptions::default()
                            },
                        );
                    }
                    Err(message) => {
                        show_toast(toasts, ToastKind::Error, message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__panel"></div>
            <div class="login-card">
                <h1 class="login-card__title">"ATELIER"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-input-row">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-input-row__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "AUTHENTICATING..." } else { "LOGIN" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
