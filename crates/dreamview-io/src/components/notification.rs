//! Transient notification banner.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdCircleCheck, LdInfo, LdTriangleAlert, LdX};
use dreamview_core::{Notification, NotificationId, Severity};
use gloo_timers::future::TimeoutFuture;

/// Props for the [`NotificationBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NotificationBannerProps {
    /// The banner to show, if any.
    notification: Option<Notification>,
    /// Delay before the exit animation starts.
    timeout_ms: u32,
    /// Length of the exit animation.
    exit_ms: u32,
    /// Start the exit animation of the given banner.
    on_retire: EventHandler<NotificationId>,
    /// Remove the given banner.
    on_dismiss: EventHandler<NotificationId>,
}

/// Fixed-position banner in the top-right corner.
///
/// Each banner schedules its own retirement when it first appears.
/// Timers that outlive their banner fire with a stale id, which the
/// session ignores.
#[component]
pub fn NotificationBanner(props: NotificationBannerProps) -> Element {
    let on_retire = props.on_retire;
    let on_dismiss = props.on_dismiss;
    let timeout_ms = props.timeout_ms;
    let exit_ms = props.exit_ms;
    let current = props.notification.as_ref().map(Notification::id);

    use_effect(use_reactive((&current,), move |(current,)| {
        let Some(id) = current else {
            return;
        };
        spawn(async move {
            TimeoutFuture::new(timeout_ms).await;
            on_retire.call(id);
            TimeoutFuture::new(exit_ms).await;
            on_dismiss.call(id);
        });
    }));

    let Some(notification) = props.notification else {
        return rsx! {};
    };

    let id = notification.id();
    let key = banner_key(&notification);
    let class = banner_class(&notification);
    let style = banner_style(notification.severity(), exit_ms);
    let message = notification.message().to_string();

    rsx! {
        div {
            key: "{key}",
            class: "{class}",
            role: "status",
            style: "{style}",
            {severity_icon(notification.severity())}
            span { "{message}" }
            button {
                class: "notification-close",
                aria_label: "Dismiss notification",
                onclick: move |_| on_dismiss.call(id),
                Icon { icon: LdX, width: 16, height: 16 }
            }
        }
    }
}

/// CSS classes for a banner: severity modifier plus the exit animation.
fn banner_class(notification: &Notification) -> String {
    let mut class = format!("notification notification-{}", notification.severity());
    if notification.is_leaving() {
        class.push_str(" notification-leaving");
    }
    class
}

/// Diffing key: one per banner, so a replacement is a new element.
fn banner_key(notification: &Notification) -> String {
    format!("notification-{}", notification.id().get())
}

/// Inline style: severity colour and the exit animation length, which
/// must match the dismissal delay.
fn banner_style(severity: Severity, exit_ms: u32) -> String {
    format!("background: {}; --exit-ms: {exit_ms}ms;", severity.color())
}

/// Lucide icon for a severity.
fn severity_icon(severity: Severity) -> Element {
    match severity {
        Severity::Success => rsx! { Icon { icon: LdCircleCheck, width: 20, height: 20 } },
        Severity::Error => rsx! { Icon { icon: LdCircleAlert, width: 20, height: 20 } },
        Severity::Info => rsx! { Icon { icon: LdInfo, width: 20, height: 20 } },
        Severity::Warning => rsx! { Icon { icon: LdTriangleAlert, width: 20, height: 20 } },
    }
}
