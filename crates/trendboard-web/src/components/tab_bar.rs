//! Tab strip

use crate::state::use_dashboard;
use leptos::prelude::*;
use trendboard_core::Tab;

#[component]
pub fn TabBar() -> impl IntoView {
    let state = use_dashboard();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-button"
                            data-tab=tab.id()
                            class:active=move || state.is_active(tab)
                            on:click=move |_| state.activate(tab)
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
