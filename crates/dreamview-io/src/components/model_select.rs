//! Model variant selector with its description.

use dioxus::prelude::*;
use dreamview_core::ModelVariant;

/// Props for the [`ModelSelect`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ModelSelectProps {
    /// Currently selected variant.
    selected: ModelVariant,
    /// Called with the raw `<option>` value on change.
    on_change: EventHandler<String>,
}

/// A `<select>` over every [`ModelVariant`] plus the selected variant's
/// description.
#[component]
pub fn ModelSelect(props: ModelSelectProps) -> Element {
    let on_change = props.on_change;
    let selected = props.selected;
    let description = selected.description();

    rsx! {
        div { class: "model-select",
            label { r#for: "modelSelect", class: "field-label", "Model" }
            select {
                id: "modelSelect",
                value: selected.value(),
                onchange: move |evt| on_change.call(evt.value()),
                for variant in ModelVariant::ALL {
                    option {
                        value: variant.value(),
                        selected: variant == selected,
                        {variant.display_name()}
                    }
                }
            }
            p { id: "modelDescription", class: "model-description", "{description}" }
        }
    }
}
