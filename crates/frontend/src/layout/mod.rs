pub mod center;
pub mod connection_banner;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use crate::shared::toast::ToastHost;
use connection_banner::ConnectionBanner;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |  ConnectionBanner      |
/// |   (Left)  |  TabBar + content      |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <ConnectionBanner />
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
