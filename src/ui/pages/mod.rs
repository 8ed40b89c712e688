//! Page views, one per route
//!
//! Every page opens with an intro block that reveals on mount. Longer pages
//! follow it with scroll sections that reveal as they enter the viewport.

mod about;
mod components;
mod contact;
mod help;
mod home;
mod not_found;
mod pricing;
mod sign_in;
mod sign_up;

pub use about::AboutPage;
pub use components::ComponentsPage;
pub use contact::ContactPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;

use leptos::prelude::*;

use crate::core::route::ViewId;
use crate::core::sequencer::{DEFAULT_STAGGER_MS, Stagger};
use crate::ui::reveal::RevealItem;

/// Delay before the first item of a page section starts
const LEAD_IN_MS: f64 = 200.0;

/// Stagger of the items inside a page section.
pub(crate) fn item_stagger() -> Stagger {
    Stagger::new(DEFAULT_STAGGER_MS).with_lead_in(LEAD_IN_MS)
}

/// Title and intro paragraph at the top of a page
#[component]
pub(crate) fn PageHeading(
    title: &'static str,
    #[prop(optional)] intro: Option<&'static str>,
) -> impl IntoView {
    view! {
        <RevealItem>
            <h1 class="text-5xl font-bold text-accent mb-12 text-center uppercase tracking-wide">{title}</h1>
        </RevealItem>
        {intro.map(|intro| view! {
            <RevealItem>
                <p class="text-lg text-midgray mb-16 text-center max-w-3xl mx-auto">{intro}</p>
            </RevealItem>
        })}
    }
}

/// Page for `id`, as mounted by the router shell.
#[component]
pub fn PageView(id: ViewId) -> impl IntoView {
    match id {
        ViewId::Home => view! { <HomePage /> }.into_any(),
        ViewId::About => view! { <AboutPage /> }.into_any(),
        ViewId::Components => view! { <ComponentsPage /> }.into_any(),
        ViewId::Contact => view! { <ContactPage /> }.into_any(),
        ViewId::Help => view! { <HelpPage /> }.into_any(),
        ViewId::Pricing => view! { <PricingPage /> }.into_any(),
        ViewId::SignUp => view! { <SignUpPage /> }.into_any(),
        ViewId::SignIn => view! { <SignInPage /> }.into_any(),
    }
}
