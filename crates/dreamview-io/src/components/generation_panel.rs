//! Source preview, generate trigger, and generated result.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdImagePlus, LdLoaderCircle, LdPlay};
use dreamview_core::{Anchor, ImageSlot, ModelVariant};

use super::ModelSelect;

/// Props for the [`GenerationPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct GenerationPanelProps {
    /// `data:` URI of the selected file.
    preview_uri: Option<String>,
    /// Object URL of the generated image, when one exists.
    result_uri: Option<String>,
    /// Selected model variant.
    model: ModelVariant,
    /// Whether a generation request is in flight.
    loading: bool,
    /// Whether the result image plays its success animation.
    success_cue: bool,
    /// Whether the download action is offered.
    download_visible: bool,
    /// Raw value of a model selector change.
    on_model_change: EventHandler<String>,
    /// Generate trigger.
    on_generate: EventHandler<()>,
    /// Download trigger.
    on_download: EventHandler<()>,
    /// "New image" trigger.
    on_reset: EventHandler<()>,
    /// The browser failed to render one of the two images.
    on_image_error: EventHandler<ImageSlot>,
}

/// Side-by-side source and result cards with the generation controls.
#[component]
pub fn GenerationPanel(props: GenerationPanelProps) -> Element {
    let on_generate = props.on_generate;
    let on_download = props.on_download;
    let on_reset = props.on_reset;
    let on_image_error = props.on_image_error;

    let result_class = if props.success_cue {
        "result-image success-animation"
    } else {
        "result-image"
    };

    rsx! {
        section { id: Anchor::GenerationPanel.element_id(), class: "generation-section",
            div { class: "image-grid",
                div { class: "image-card",
                    h3 { class: "card-title", "Original" }
                    if let Some(ref uri) = props.preview_uri {
                        img {
                            id: "originalImage",
                            src: "{uri}",
                            alt: "Selected image",
                            onerror: move |_| on_image_error.call(ImageSlot::Source),
                        }
                    }
                }

                div { class: "image-card",
                    h3 { class: "card-title", "Generated" }
                    if props.loading {
                        div { id: "loadingSpinner", class: "loading-spinner",
                            Icon { class: "spin", icon: LdLoaderCircle, width: 32, height: 32 }
                            p { "Dreaming..." }
                        }
                    }
                    if let Some(ref uri) = props.result_uri {
                        img {
                            id: "generatedImage",
                            class: "{result_class}",
                            src: "{uri}",
                            alt: "Generated image",
                            onerror: move |_| on_image_error.call(ImageSlot::Generated),
                        }
                    } else if !props.loading {
                        p { class: "placeholder", "Your generated image will appear here" }
                    }
                }
            }

            div { class: "controls",
                ModelSelect {
                    selected: props.model,
                    on_change: props.on_model_change,
                }

                div { class: "button-row",
                    button {
                        id: "generateBtn",
                        class: "btn btn-primary",
                        disabled: props.loading,
                        onclick: move |_| on_generate.call(()),
                        if props.loading {
                            Icon { class: "spin", icon: LdLoaderCircle, width: 16, height: 16 }
                            "Generating..."
                        } else {
                            Icon { icon: LdPlay, width: 16, height: 16 }
                            "Generate Image"
                        }
                    }

                    if props.download_visible {
                        button {
                            id: "downloadBtn",
                            class: "btn btn-success",
                            onclick: move |_| on_download.call(()),
                            Icon { icon: LdDownload, width: 16, height: 16 }
                            "Download"
                        }
                    }

                    button {
                        id: "newImageBtn",
                        class: "btn btn-secondary",
                        onclick: move |_| on_reset.call(()),
                        Icon { icon: LdImagePlus, width: 16, height: 16 }
                        "New Image"
                    }
                }
            }
        }
    }
}
