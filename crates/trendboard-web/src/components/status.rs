//! Loading indicator and error banner

use crate::state::use_dashboard;
use leptos::prelude::*;

/// Spinner shown while the active tab's batch is in flight
#[component]
pub fn AnalyticsLoader() -> impl IntoView {
    let state = use_dashboard();

    view! {
        <div id="analyticsLoader" class="loader" class:hidden=move || !state.is_loading()>
            <div class="spinner"></div>
            <p>"Loading analytics..."</p>
        </div>
    }
}

/// One banner for the last failed batch
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_dashboard();

    move || {
        state.error.get().map(|message| {
            view! {
                <div class="error-message" role="alert">
                    <span>{message}</span>
                    <button class="btn-icon" on:click=move |_| state.error.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
