use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::{Parallax, RevealPreset};
use crate::core::route::ViewId;
use crate::core::sequencer::{ActivationMode, Stagger};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{RevealItem, RevealSection, use_reveal_scope};

/// Delay between the headline, the tagline and the call to action
const HERO_STAGGER_MS: f64 = 300.0;
const HERO_LEAD_IN_MS: f64 = 200.0;

/// Full-height banner that reveals as soon as the page mounts
#[component]
pub fn Hero() -> impl IntoView {
    let background = NodeRef::<leptos::html::Div>::new();
    let scope = use_reveal_scope();

    // Background layer drifts down while the banner scrolls out through the top
    let drift = move || {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(scope) = scope {
                scope.track_scroll();
            }
            // Measured on the banner, the layer's own box moves with the drift
            if let Some(banner) = background.get().and_then(|layer| layer.parent_element()) {
                let rect = banner.get_bounding_client_rect();
                return Parallax::HERO.to_style(rect.top(), rect.bottom());
            }
        }
        #[cfg(feature = "ssr")]
        let _ = (scope, background);
        Parallax::HERO.to_style(0.0, 0.0)
    };

    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=Stagger::new(HERO_STAGGER_MS).with_lead_in(HERO_LEAD_IN_MS)
            class="h-screen flex items-center justify-center bg-gradient-to-br from-primary to-accent text-light relative overflow-hidden"
        >
            <div
                node_ref=background
                class="absolute inset-0 bg-gradient-to-t from-secondary/50 to-transparent opacity-30 will-change-transform"
                style=drift
            ></div>

            <div class="text-center max-w-5xl mx-auto px-8 relative z-10">
                <RevealItem preset=RevealPreset::Rise>
                    <h1 class="text-6xl md:text-7xl font-extrabold mb-6 tracking-wide uppercase bg-clip-text text-transparent bg-gradient-to-r from-light to-accent">
                        "Unleash Epic UI with Tailwind"
                    </h1>
                </RevealItem>
                <RevealItem preset=RevealPreset::Rise>
                    <p class="text-xl md:text-2xl mb-10 font-medium max-w-3xl mx-auto">
                        "Transform your web projects with cutting-edge, animated UI components designed for the future."
                    </p>
                </RevealItem>
                <RevealItem preset=RevealPreset::Rise>
                    <A
                        href=ViewId::Components.path()
                        attr:class="bg-light text-secondary px-10 py-5 rounded-full font-bold text-xl inline-flex items-center justify-center gap-3 transition-transform hover:scale-110 active:scale-95"
                    >
                        "Explore Now"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 text-accent" />
                    </A>
                </RevealItem>
            </div>

            // Floating orbs
            <div class="absolute top-10 left-10 w-24 h-24 bg-accent/30 rounded-full blur-xl animate-float"></div>
            <div class="absolute bottom-20 right-20 w-32 h-32 bg-primary/30 rounded-full blur-xl animate-float-reverse"></div>
        </RevealSection>
    }
}
