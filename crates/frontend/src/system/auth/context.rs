use contracts::system::auth::{AuthError, AuthSession, LoginRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::config::{use_config, AppConfig};
use crate::shared::storage::session_store;

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    let restored = session_store(&config.layout()).load();
    if let Some(user) = &restored {
        log::info!("session restored for {}", user.email);
    }

    let (auth_state, set_auth_state) = signal(AuthSession::restored(restored));

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthSession>, WriteSignal<AuthSession>) {
    let auth_state =
        use_context::<ReadSignal<AuthSession>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthSession>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Mock sign-in after the configured latency. The session survives reloads.
pub async fn do_login(
    config: AppConfig,
    set_auth_state: WriteSignal<AuthSession>,
    request: LoginRequest,
) -> Result<(), AuthError> {
    TimeoutFuture::new(config.get().timing.login_latency_ms).await;

    let mut session = AuthSession::default();
    let user = session.login(&request)?.clone();
    if let Err(e) = session_store(&config.layout()).save(&user) {
        log::warn!("session not persisted: {}", e);
    }
    set_auth_state.set(session);
    Ok(())
}

pub fn do_logout(config: &AppConfig, set_auth_state: WriteSignal<AuthSession>) {
    if let Err(e) = session_store(&config.layout()).clear() {
        log::warn!("stored session not cleared: {}", e);
    }
    set_auth_state.update(|s| s.logout());
}
