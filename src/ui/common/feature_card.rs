use leptos::prelude::*;

use crate::core::catalog::{Feature, FeatureIcon};
use crate::core::forms::Notifier;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

pub const LEARN_MORE_MESSAGE: &str = "Learn More (Placeholder)";

fn icon_path(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Check => icons::CHECK_CIRCLE,
        FeatureIcon::Code => icons::CODE,
        FeatureIcon::Users => icons::USERS,
        FeatureIcon::Rocket => icons::ROCKET,
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let notifier = use_notifications();

    view! {
        <div class="card-hover relative p-8 bg-secondary/20 backdrop-blur-lg border border-light/10 rounded-3xl text-center overflow-hidden h-full">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-accent/10 animate-glow"></div>

            <div class="text-accent mb-6 relative z-10 flex justify-center">
                <Icon name=icon_path(feature.icon) class="w-12 h-12" />
            </div>

            <h3 class="text-2xl font-bold mb-4 tracking-wide uppercase bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent relative z-10">
                {feature.title}
            </h3>
            <p class="text-midgray text-sm mb-6 max-w-xs mx-auto relative z-10">{feature.description}</p>

            <button
                class="flex items-center gap-2 mx-auto bg-transparent border border-accent text-accent px-5 py-2 rounded-full hover:bg-accent hover:text-secondary transition-all hover:scale-105 active:scale-95 relative z-10"
                on:click=move |_| notifier.notify(LEARN_MORE_MESSAGE)
            >
                "Learn More"
                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
            </button>
        </div>
    }
}
