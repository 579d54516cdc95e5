// ============================================================================
// POPUP - Notifier del navegador (SweetAlert2, con fallback a alert/confirm)
// ============================================================================

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen_futures::spawn_local;

use crate::models::{ConfirmPrompt, Notification};
use crate::utils::escape_html;
use crate::utils::swal_ffi::{fire, swal_available, SwalOptions};
use crate::views::traits::Notifier;

/// Cuerpo HTML del popup. Todo valor dinámico va escapado.
pub fn notification_html(notification: &Notification) -> String {
    let mut html = escape_html(&notification.message);
    for line in &notification.details {
        html.push_str("<br>");
        html.push_str(&escape_html(line));
    }
    html
}

/// Texto plano para window.alert
fn notification_text(notification: &Notification) -> String {
    let mut lines = vec![notification.title.clone(), notification.message.clone()];
    lines.extend(notification.details.iter().cloned());
    lines.join("\n")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SwalNotifier;

impl Notifier for SwalNotifier {
    fn notify(&self, notification: Notification) {
        if !swal_available() {
            log::warn!("⚠️ [POPUP] Swal no cargado, usando window.alert");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&notification_text(&notification));
            }
            return;
        }

        let options = SwalOptions::new()
            .set("title", notification.title.as_str())
            .set("html", notification_html(&notification).as_str())
            .set("icon", notification.severity.icon());
        spawn_local(async move {
            if let Err(e) = fire(options).await {
                log::error!("❌ [POPUP] Swal.fire falló: {:?}", e);
            }
        });
    }

    fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool> {
        async move {
            if !swal_available() {
                return web_sys::window()
                    .and_then(|window| window.confirm_with_message(&prompt.title).ok())
                    .unwrap_or(false);
            }

            let options = SwalOptions::new()
                .set("title", prompt.title.as_str())
                .set("icon", "warning")
                .set("showCancelButton", true)
                .set("confirmButtonText", prompt.confirm_text.as_str())
                .set("cancelButtonText", prompt.cancel_text.as_str());
            match fire(options).await {
                Ok(confirmed) => confirmed,
                Err(e) => {
                    log::error!("❌ [POPUP] Confirmación falló: {:?}", e);
                    false
                }
            }
        }
        .boxed_local()
    }
}
