use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::forms::FormKind;
use crate::core::motion::RevealPreset;
use crate::core::route::ViewId;
use crate::core::sequencer::Stagger;
use crate::ui::common::form::{PlaceholderForm, collect_fields};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{RevealItem, RevealSection};

const QUICK_LINKS: [ViewId; 4] = [
    ViewId::Components,
    ViewId::Pricing,
    ViewId::Help,
    ViewId::Contact,
];

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("https://twitter.com", "Twitter", icons::CHAT),
    ("https://github.com", "GitHub", icons::CODE),
    ("https://linkedin.com", "LinkedIn", icons::BRIEFCASE),
];

#[component]
pub fn Footer() -> impl IntoView {
    let newsletter = PlaceholderForm::new(FormKind::Newsletter);
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        newsletter.submit(collect_fields(&[("email", email)]));
    };

    view! {
        <footer class="bg-secondary/40 backdrop-blur-lg border-t border-light/10 py-12 relative">
            <RevealSection
                preset=RevealPreset::Footer
                stagger=Stagger::new(200.0)
                class="max-w-6xl mx-auto px-8 grid grid-cols-1 md:grid-cols-4 gap-12"
            >
                // Brand & Copyright
                <RevealItem preset=RevealPreset::FormItem class="text-center md:text-left">
                    <h3 class="text-2xl font-extrabold text-light bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent mb-4">
                        "Componix UI"
                    </h3>
                    <p class="text-midgray text-sm">"© 2025 Componix UI. All rights reserved."</p>
                </RevealItem>

                // Links
                <RevealItem preset=RevealPreset::FormItem class="text-center">
                    <h4 class="text-lg font-bold text-accent mb-4 uppercase tracking-wide">"Quick Links"</h4>
                    <ul class="space-y-2">
                        {QUICK_LINKS
                            .iter()
                            .map(|view| view! {
                                <li>
                                    <A href=view.path() attr:class="text-midgray hover:text-accent">
                                        {view.label()}
                                    </A>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </RevealItem>

                // Newsletter Signup
                <RevealItem preset=RevealPreset::FormItem class="text-center">
                    <h4 class="text-lg font-bold text-accent mb-4 uppercase tracking-wide">"Stay in the Loop"</h4>
                    <form
                        class="flex justify-center gap-2"
                        style=move || newsletter.style()
                        on:submit=on_submit
                    >
                        <input
                            type="email"
                            name="email"
                            placeholder="Enter your email"
                            class="bg-transparent border-b-2 border-accent p-3 text-light placeholder-midgray focus:border-primary focus:outline-none rounded-none w-64 transition-transform focus:scale-[1.02]"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="bg-accent text-secondary p-3 rounded-full hover:bg-primary hover:text-light transition-all hover:scale-110 active:scale-95"
                            aria-label="Subscribe"
                            disabled=move || newsletter.is_submitting()
                        >
                            <Icon name=icons::ARROW_RIGHT />
                        </button>
                    </form>
                </RevealItem>

                // Social Links
                <RevealItem preset=RevealPreset::FormItem class="flex justify-center md:justify-end gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(href, label, icon)| view! {
                            <a
                                href=*href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=*label
                                class="text-light hover:text-accent transition-transform hover:scale-125 hover:rotate-12"
                            >
                                <Icon name=*icon class="w-8 h-8" />
                            </a>
                        })
                        .collect_view()}
                </RevealItem>
            </RevealSection>
        </footer>
    }
}
