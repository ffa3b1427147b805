use dioxus::prelude::*;

use quiz_core::model::Language;

fn switcher_class(active: bool) -> &'static str {
    if active {
        "lang-switch lang-switch--active"
    } else {
        "lang-switch"
    }
}

/// Buttons for every supported language; the active one is disabled.
#[component]
pub fn LanguageSwitcher(current: Language, on_switch: EventHandler<Language>) -> Element {
    rsx! {
        div { class: "lang-switcher",
            for language in Language::ALL {
                button {
                    key: "{language}",
                    class: switcher_class(language == current),
                    r#type: "button",
                    disabled: language == current,
                    onclick: move |_| on_switch.call(language),
                    "{language.label()}"
                }
            }
        }
    }
}
