//! Console banner and `window.prevacare` helpers for people who open devtools.
//!
//! `prevacare.features()` and `prevacare.stats()` dump the content tables as
//! JSON. Disabled with `?console=off`.

use leptos::prelude::*;
use prevacare_core::index::{ContentIndex, IndexSection};
use prevacare_core::{BRAND, VERSION};
use wasm_bindgen::prelude::*;

/// Namespace object attached to `window`.
const NAMESPACE: &str = "prevacare";

fn banner() -> String {
    format!(
        r#"
   ___                     ___
  | _ \_ _ _____ ____ _   / __|__ _ _ _ ___
  |  _/ '_/ -_) V / _` | | (__/ _` | '_/ -_)
  |_| |_| \___|\_/\__,_|  \___\__,_|_| \___|

  {BRAND} {VERSION} | Healthcare, powered by AI
"#
    )
}

/// Pretty JSON for one section of the content index.
fn section_json(section: IndexSection) -> String {
    ContentIndex::section(section)
        .to_json_pretty()
        .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
}

/// Print the banner and install console commands once the page mounts.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleCommands(enabled: bool) -> impl IntoView {
    Effect::new(move || {
        if enabled {
            print_banner();
            install_commands();
        }
    });

    view! {}
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #2563eb; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%c(i) try {NAMESPACE}.features() or {NAMESPACE}.stats()"
        )),
        &JsValue::from_str("color: #6b7280; font-size: 10px;"),
    );
}

fn install_commands() {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    // Effects can re-run after hot reload; keep the first namespace.
    if Reflect::has(&window, &JsValue::from_str(NAMESPACE)).unwrap_or(false) {
        return;
    }

    let namespace = Object::new();

    let commands: [(&str, IndexSection); 2] = [
        ("features", IndexSection::Features),
        ("stats", IndexSection::Stats),
    ];

    for (name, section) in commands {
        let command = Closure::wrap(Box::new(move || {
            web_sys::console::log_1(&JsValue::from_str(&section_json(section)));
        }) as Box<dyn Fn()>);

        let _ = Reflect::set(&namespace, &JsValue::from_str(name), command.as_ref());
        command.forget();
    }

    let _ = Reflect::set(&window, &JsValue::from_str(NAMESPACE), &namespace);
    tracing::debug!("console commands installed on window.{NAMESPACE}");
}
