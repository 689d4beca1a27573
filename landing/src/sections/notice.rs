use std::time::Duration;

use leptos::prelude::*;
use mealversity_core::notice::Notice;

use crate::use_site_config;

/// Toast for the latest notice. Each notice dismisses itself after
/// `notice.dismiss_ms` unless a newer one replaced it first.
#[component]
pub fn NoticeToast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let dismiss_after = Duration::from_millis(u64::from(use_site_config().notice.dismiss_ms));

    Effect::new(move || {
        if let Some(shown) = notice.get() {
            set_timeout(
                move || {
                    notice.try_update(|current| {
                        if current.as_ref() == Some(&shown) {
                            *current = None;
                        }
                    });
                },
                dismiss_after,
            );
        }
    });

    move || {
        notice.get().map(|n| {
            let class = n.css_class();
            view! {
                <div class=class role="status">
                    <span>{n.message}</span>
                    <button class="notice-close" aria-label="Dismiss" on:click=move |_| notice.set(None)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
