//! Browser online/offline tracking and the pending-sync notice.

use contracts::shared::connectivity::{ConnectivityStatus, ConnectivityTracker, SyncNotice};
use contracts::shared::storage::PendingSyncCounter;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::window;

use super::config::use_config;
use super::i18n::use_i18n;
use super::storage::{pending_counter, BrowserStorage};
use super::toast::use_toast;

#[derive(Clone, Copy)]
pub struct ConnectivityContext {
    tracker: RwSignal<ConnectivityTracker>,
    counter: StoredValue<PendingSyncCounter<BrowserStorage>>,
}

impl ConnectivityContext {
    pub fn status(&self) -> ConnectivityStatus {
        self.tracker.with(|t| t.status())
    }

    pub fn is_online(&self) -> bool {
        self.tracker.with(|t| t.is_online())
    }

    /// Counts a locally stored write while offline.
    pub fn record_write(&self) {
        let counted = self
            .tracker
            .try_update(|t| t.record_write())
            .unwrap_or(false);
        if counted {
            let count = self.tracker.with_untracked(|t| t.pending_count());
            self.counter.with_value(|c| {
                if let Err(e) = c.set(count) {
                    log::warn!("pending sync counter not saved: {}", e);
                }
            });
        }
    }
}

fn navigator_online() -> bool {
    window().map(|w| w.navigator().on_line()).unwrap_or(true)
}

fn listen(event: &str, handler: impl FnMut() + 'static) {
    let Some(w) = window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(handler);
    if w
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not listen for '{}' events", event);
    }
    closure.forget();
}

#[component]
pub fn ConnectivityProvider(children: Children) -> impl IntoView {
    let config = use_config();
    let i18n = use_i18n();
    let toast = use_toast();

    let counter = pending_counter(&config.layout());
    let tracker = RwSignal::new(ConnectivityTracker::new(
        navigator_online(),
        counter.get(),
        config.get().timing.sync_notice_delay_ms,
    ));
    let ctx = ConnectivityContext {
        tracker,
        counter: StoredValue::new(counter),
    };

    let schedule_sync = move |notice: SyncNotice| {
        log::info!(
            "back online, {} pending records, notifying in {} ms",
            notice.pending_count,
            notice.delay_ms
        );
        spawn_local(async move {
            TimeoutFuture::new(notice.delay_ms).await;
            let Some(notification) = tracker.try_update(|t| t.complete_sync(notice.ticket)).flatten()
            else {
                return;
            };
            ctx.counter.with_value(|c| {
                if let Err(e) = c.reset() {
                    log::warn!("pending sync counter not cleared: {}", e);
                }
            });
            toast.success(i18n.localizer().sync_message(&notification));
        });
    };

    listen("online", move || {
        if let Some(notice) = tracker.try_update(|t| t.went_online()).flatten() {
            schedule_sync(notice);
        }
    });
    listen("offline", move || {
        log::info!("connection lost");
        tracker.update(|t| t.went_offline());
    });

    provide_context(ctx);

    children()
}

pub fn use_connectivity() -> ConnectivityContext {
    use_context::<ConnectivityContext>().expect("ConnectivityProvider not found in component tree")
}
