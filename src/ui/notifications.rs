//! Toast notifications
//!
//! The site-wide notification surface. Placeholder actions and form
//! submissions post their acknowledgments here through the [`Notifier`] trait.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::forms::Notifier;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// How long a toast stays on screen
const AUTO_DISMISS_MS: u32 = 4000;

/// Duration of the exit transition
const EXIT_MS: u32 = 300;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u64,
    pub message: String,
}

/// Notifications container component
/// Place this once at the application root
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-24 right-4 z-50 flex flex-col gap-2 max-w-sm" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! { <Toast item=item notifications=notifications /> }
                }
            />
        </div>
    }
}

#[component]
fn Toast(
    item: NotificationItem,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let id = item.id;
    let (is_exiting, _set_is_exiting) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            _set_is_exiting.set(true);
            // Wait for exit animation
            TimeoutFuture::new(EXIT_MS).await;
            notifications.try_update(|n| n.retain(|i| i.id != id));
        });
    }

    view! {
        <div
            class="flex items-start gap-3 p-4 rounded-2xl border border-accent/30 bg-secondary/80 backdrop-blur-lg shadow-lg transition-all duration-300"
            style=move || {
                if is_exiting.get() {
                    "opacity: 0; transform: translateX(1rem);"
                } else {
                    "opacity: 1; transform: translateX(0);"
                }
            }
        >
            <div class="text-accent">
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
            </div>
            <p class="flex-1 min-w-0 text-sm text-light">{item.message}</p>
            <button
                class="text-midgray hover:text-light transition-colors"
                aria-label="Dismiss"
                on:click=move |_| {
                    notifications.update(|n| n.retain(|i| i.id != id));
                }
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Handle to the toast stack
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: StoredValue<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification, dropping the oldest beyond the limit
    pub fn push(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let message = message.into();
        leptos::logging::log!("Notification: {}", message);
        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, message });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    /// Clear all notifications
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationManager {
    fn notify(&self, message: &str) {
        self.push(message);
    }
}

/// Create the manager and make it available to descendants
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from context
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_the_stack() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            for i in 0..7 {
                manager.notify(&format!("message {}", i));
            }

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), MAX_NOTIFICATIONS);
            assert_eq!(items.front().map(|i| i.message.as_str()), Some("message 2"));
            assert_eq!(items.back().map(|i| i.id), Some(6));

            manager.clear();
            assert!(manager.notifications().get_untracked().is_empty());
        });
    }
}
