//! Card presenting one component demo: live preview, description and a
//! collapsible code panel.

use leptos::prelude::*;

use crate::core::catalog::{ComponentDemo, DemoPreview};
use crate::core::forms::Notifier;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

pub const COPIED_MESSAGE: &str = "Code copied to clipboard!";
pub const VIEW_DOCS_MESSAGE: &str = "View Documentation (Placeholder)";

/// Script that writes `code` to the clipboard, with `code` encoded as a
/// JavaScript string literal.
pub fn clipboard_script(code: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "navigator.clipboard.writeText({})",
        serde_json::to_string(code)?
    ))
}

#[component]
fn Preview(preview: DemoPreview) -> impl IntoView {
    match preview {
        DemoPreview::Alert => view! {
            <div class="bg-accent text-secondary p-4 rounded-lg shadow-lg">"Success Alert!"</div>
        }
        .into_any(),
        DemoPreview::Modal => view! {
            <div class="bg-secondary p-6 rounded-lg shadow-xl border border-light/10">"Modal Content"</div>
        }
        .into_any(),
        DemoPreview::Dropdown => view! {
            <select class="bg-secondary border border-accent p-2 rounded text-light">
                <option>"Option 1"</option>
            </select>
        }
        .into_any(),
        DemoPreview::Button => view! {
            <button class="bg-primary text-light px-4 py-2 rounded hover:bg-accent">"Click Me"</button>
        }
        .into_any(),
        DemoPreview::Card => view! {
            <div class="bg-secondary p-4 rounded-lg shadow-md">"Card Content"</div>
        }
        .into_any(),
        DemoPreview::Tooltip => view! {
            <div class="relative group">
                <button>"Hover"</button>
                <span class="absolute hidden group-hover:block bg-accent p-2 rounded">"Tooltip"</span>
            </div>
        }
        .into_any(),
        DemoPreview::Accordion => view! {
            <details class="bg-secondary p-4 rounded">
                <summary>"Question"</summary>
                <p>"Answer"</p>
            </details>
        }
        .into_any(),
        DemoPreview::ProgressBar { percent } => view! {
            <div class="bg-midgray h-2 rounded-full w-full">
                <div
                    class="bg-accent h-full rounded-full transition-all duration-1000"
                    style=format!("width: {}%;", percent.min(100))
                ></div>
            </div>
        }
        .into_any(),
        DemoPreview::Tabs => view! {
            <div class="flex">
                <button class="bg-accent p-2">"Tab 1"</button>
                <button class="bg-secondary p-2">"Tab 2"</button>
            </div>
        }
        .into_any(),
        DemoPreview::InteractiveButton => view! {
            <button class="bg-accent text-secondary px-8 py-4 rounded-full font-bold hover:bg-primary transition-all shadow-lg hover:scale-110 hover:rotate-3">
                "Engage"
            </button>
        }
        .into_any(),
        DemoPreview::ElevatedCard => view! {
            <div class="bg-secondary/50 p-8 rounded-3xl shadow-xl backdrop-blur-md">"Elevated Content Layer"</div>
        }
        .into_any(),
        DemoPreview::SmartInput => view! {
            <input
                class="bg-transparent border-b-2 border-accent p-4 w-full focus:border-primary focus:outline-none transition-all text-light placeholder-midgray"
                placeholder="Type here..."
            />
        }
        .into_any(),
        DemoPreview::Avatar => view! {
            <div class="w-16 h-16 bg-primary rounded-full flex items-center justify-center text-light font-bold">"UI"</div>
        }
        .into_any(),
    }
}

#[component]
pub fn ComponentCard(
    demo: ComponentDemo,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let notifier = use_notifications();
    let (show_code, set_show_code) = signal(false);
    let code = StoredValue::new(demo.code());

    let copy_code = move |_| {
        let script = code.with_value(|code| clipboard_script(code));
        match script {
            Ok(_script) => {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Err(err) = js_sys::eval(&_script) {
                        leptos::logging::warn!("Clipboard write failed: {:?}", err);
                        return;
                    }
                }
                notifier.notify(COPIED_MESSAGE);
            }
            Err(err) => leptos::logging::warn!("Cannot encode snippet: {}", err),
        }
    };

    view! {
        <div
            data-demo-id=demo.id
            class=format!(
                "card-hover p-8 bg-secondary/20 backdrop-blur-lg border border-light/10 rounded-3xl text-center h-full {}",
                class,
            )
        >
            <h3 class="text-2xl font-bold mb-4 tracking-wide uppercase bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent">
                {demo.name}
            </h3>

            <div class="flex justify-center items-center mb-6">
                <Preview preview=demo.preview />
            </div>

            <p class="text-midgray text-sm mb-6 max-w-xs mx-auto">{demo.description()}</p>

            <div class="flex justify-center gap-4 mb-6">
                <button
                    class="flex items-center gap-2 bg-transparent border border-accent text-accent px-4 py-2 rounded-full hover:bg-accent hover:text-secondary transition-all hover:scale-105 active:scale-95"
                    aria-expanded=move || show_code.get().to_string()
                    on:click=move |_| set_show_code.update(|v| *v = !*v)
                >
                    <Icon name=icons::CODE class="w-4 h-4" />
                    {move || if show_code.get() { "Hide Code" } else { "Show Code" }}
                </button>
                <button
                    class="flex items-center gap-2 bg-accent text-secondary px-4 py-2 rounded-full hover:bg-primary hover:text-light transition-all hover:scale-105 active:scale-95"
                    on:click=move |_| notifier.notify(VIEW_DOCS_MESSAGE)
                >
                    <Icon name=icons::BOOK class="w-4 h-4" />
                    "View Docs"
                </button>
            </div>

            <Show when=move || show_code.get()>
                <div class="code-panel-enter bg-secondary/50 p-4 rounded-xl text-left text-light text-sm relative overflow-auto max-h-48">
                    <pre class="overflow-x-auto">
                        <code>{code.get_value()}</code>
                    </pre>
                    <button
                        class="absolute top-2 right-2 text-accent hover:text-primary transition-transform hover:scale-110 active:scale-90"
                        aria-label="Copy code"
                        on:click=copy_code
                    >
                        <Icon name=icons::COPY class="w-4 h-4" />
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_script_escapes_snippet() {
        let script = clipboard_script("<div className=\"x\">it's</div>\nnext").unwrap();
        assert_eq!(
            script,
            r#"navigator.clipboard.writeText("<div className=\"x\">it's</div>\nnext")"#
        );
    }
}
