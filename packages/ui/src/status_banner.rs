//! Transient status banner and its expiry timer.

use dioxus::prelude::*;
use store::{expire_banner, Banner, BannerKind, UserDirectory, BANNER_DURATION};

use crate::user_manager::DirectoryHandle;

#[component]
pub fn StatusBanner(banner: Banner) -> Element {
    let class = match banner.kind {
        BannerKind::Success => "status-banner success",
        BannerKind::Error => "status-banner error",
    };

    rsx! {
        div { class, role: "status", "{banner.message}" }
    }
}

/// Clear the banner currently shown after [`BANNER_DURATION`].
///
/// The timer only clears the banner it was scheduled for; a banner shown
/// in the meantime gets its own full duration.
pub fn schedule_banner_expiry(directory: Signal<UserDirectory>) {
    let Some(seq) = directory.peek().banner().map(|b| b.seq) else {
        return;
    };

    spawn(async move {
        let mut handle = DirectoryHandle(directory);
        if expire_banner(&mut handle, seq, banner_delay()).await {
            tracing::debug!("Banner {} expired", seq);
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn banner_delay() {
    gloo_timers::future::sleep(BANNER_DURATION).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn banner_delay() {
    tokio::time::sleep(BANNER_DURATION).await;
}
