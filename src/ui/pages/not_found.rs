//! Not found page component
//!
//! Rendered by the shell for any path missing from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::route::ViewId;
use crate::core::sequencer::ActivationMode;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::item_stagger;
use crate::ui::reveal::{RevealItem, RevealSection};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=item_stagger()
            class="min-h-[70vh] bg-neutral flex flex-col items-center justify-center p-4 text-center"
        >
            <RevealItem>
                <div class="w-24 h-24 mx-auto mb-6 bg-secondary/40 rounded-full flex items-center justify-center text-accent">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>
                <h1 class="text-6xl font-bold text-accent mb-4">"404"</h1>
            </RevealItem>

            <RevealItem>
                <h2 class="text-2xl font-semibold text-light mb-2">"Page Not Found"</h2>
                <p class="text-midgray mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
            </RevealItem>

            <RevealItem class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <A
                    href=ViewId::Home.path()
                    attr:class="px-6 py-3 bg-accent text-secondary font-bold rounded-full hover:bg-primary hover:text-light transition-colors"
                >
                    "Go Home"
                </A>
                <A
                    href=ViewId::Components.path()
                    attr:class="px-6 py-3 border border-accent text-accent font-medium rounded-full hover:bg-accent hover:text-secondary transition-colors"
                >
                    "Browse Components"
                </A>
            </RevealItem>
        </RevealSection>
    }
}
