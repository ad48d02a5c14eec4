use std::rc::Rc;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdSparkles;
use dreamview_core::{Controller, FileCandidate, ImageSlot, IntakeSource, NotificationId, Session};
use dreamview_io::{
    AppController, BrowserPlatform, FileUpload, GenerationPanel, HttpGenerator,
    NotificationBanner, SignalSession,
};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Builds the controller once per page session and wires the upload
/// zone, generation panel, and notification banner to it. All state
/// lives in one `Signal<Session>`; components render from it and report
/// events back through the controller.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let config = use_hook(dreamview_io::config::load_config);
    let session = use_signal(|| Session::new(config.default_model));
    let controller: Rc<AppController> = use_hook(|| {
        Rc::new(Controller::new(
            SignalSession::new(session),
            BrowserPlatform,
            HttpGenerator::new(config.endpoint.clone()),
        ))
    });

    // --- Event handlers ---
    let on_intake = {
        let c = Rc::clone(&controller);
        move |(source, candidate): (IntakeSource, Option<FileCandidate>)| {
            c.intake(source, candidate);
        }
    };
    let on_drag = {
        let c = Rc::clone(&controller);
        move |dragging: bool| c.set_dragging(dragging)
    };
    let on_read_error = {
        let c = Rc::clone(&controller);
        move |(source, reason): (IntakeSource, String)| c.read_failed(source, &reason)
    };
    let on_model_change = {
        let c = Rc::clone(&controller);
        move |value: String| c.choose_model(&value)
    };
    let on_generate = {
        let c = Rc::clone(&controller);
        move |()| {
            let c = Rc::clone(&c);
            spawn(async move {
                c.generate().await;
            });
        }
    };
    let on_download = {
        let c = Rc::clone(&controller);
        move |()| c.download()
    };
    let on_reset = {
        let c = Rc::clone(&controller);
        move |()| c.reset()
    };
    let on_image_error = {
        let c = Rc::clone(&controller);
        move |slot: ImageSlot| c.image_failed(slot)
    };
    let on_retire = {
        let c = Rc::clone(&controller);
        move |id: NotificationId| c.retire_notification(id)
    };
    let on_dismiss = {
        let c = Rc::clone(&controller);
        move |id: NotificationId| c.dismiss_notification(id)
    };

    // --- Layout ---
    let state = session.read();
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        // Swallow drops that miss the upload zone so the browser does
        // not navigate away to the dropped file.
        div {
            class: "page",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| evt.prevent_default(),

            header { class: "page-header",
                h1 { class: "title",
                    Icon { icon: LdSparkles, width: 28, height: 28 }
                    "DeepDream Image Generator"
                }
                p { class: "subtitle",
                    "Upload an image and let a neural network dream on it"
                }
            }

            main { class: "content",
                FileUpload {
                    dragging: state.is_dragging(),
                    on_intake: on_intake,
                    on_drag: on_drag,
                    on_read_error: on_read_error,
                }

                if state.panel_visible() {
                    GenerationPanel {
                        preview_uri: state.preview_uri().map(str::to_owned),
                        result_uri: state.result_uri().map(str::to_owned),
                        model: state.model(),
                        loading: state.is_loading(),
                        success_cue: state.success_cue(),
                        download_visible: state.download_visible(),
                        on_model_change: on_model_change,
                        on_generate: on_generate,
                        on_download: on_download,
                        on_reset: on_reset,
                        on_image_error: on_image_error,
                    }
                }
            }

            NotificationBanner {
                notification: state.notification().cloned(),
                timeout_ms: config.notification_timeout_ms,
                exit_ms: config.notification_exit_ms,
                on_retire: on_retire,
                on_dismiss: on_dismiss,
            }
        }
    }
}
