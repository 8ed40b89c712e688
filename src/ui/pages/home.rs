//! Home page
//!
//! Hero banner followed by scroll sections:
//! - Core innovations
//! - Component showcase
//! - Investment tiers
//! - Testimonials
//! - Why choose us
//! - Call to action

use leptos::prelude::*;
use leptos_meta::{Link, Meta};
use leptos_router::components::A;
use serde::Serialize;

use crate::core::catalog::{
    CORE_INNOVATIONS, Feature, HOME_PLANS, HOME_SHOWCASE, PricingPlan, TESTIMONIALS, WHY_CHOOSE,
};
use crate::core::motion::RevealPreset;
use crate::core::route::ViewId;
use crate::ui::common::{ComponentCard, FeatureCard, Hero, PricingTier, TestimonialCard};
use crate::ui::pages::item_stagger;
use crate::ui::reveal::{RevealItem, RevealSection};

const SITE_URL: &str = "https://componix.dev/";
const DESCRIPTION: &str =
    "Transform your web projects with cutting-edge, animated UI components designed for the future.";

/// schema.org `Offer` for one pricing tier
#[derive(Serialize)]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    price: &'static str,
}

impl From<&PricingPlan> for Offer {
    fn from(plan: &PricingPlan) -> Self {
        Self {
            kind: "Offer",
            name: plan.tier,
            price: plan.price,
        }
    }
}

/// Structured data describing the site for search engines.
fn structured_data() -> serde_json::Value {
    let offers: Vec<Offer> = HOME_PLANS.iter().map(Offer::from).collect();
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": "Componix UI",
        "url": SITE_URL,
        "description": DESCRIPTION,
        "offers": offers,
    })
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content="tailwind, ui components, animations, dark theme, leptos" />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content="Componix UI - Animated Tailwind Components" />
        <Meta property="og:description" content=DESCRIPTION />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Componix UI - Animated Tailwind Components" />
        <Meta property="twitter:description" content=DESCRIPTION />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}

/// Scroll section with a heading and a grid of revealed cards
#[component]
fn ShowcaseSection(
    heading: &'static str,
    #[prop(into)] class: String,
    #[prop(default = "grid md:grid-cols-3 gap-12")] grid: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <RevealSection preset=RevealPreset::Section stagger=item_stagger() class=class>
            <div class="max-w-6xl mx-auto px-8 relative z-10">
                <RevealItem>
                    <h2 class="text-5xl font-extrabold text-center text-accent mb-16 tracking-wide uppercase">
                        {heading}
                    </h2>
                </RevealItem>
                <div class=grid>{children()}</div>
            </div>
        </RevealSection>
    }
}

fn feature_items(features: &'static [Feature]) -> impl IntoView {
    features
        .iter()
        .map(|feature| view! {
            <RevealItem>
                <FeatureCard feature=*feature />
            </RevealItem>
        })
        .collect_view()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="bg-neutral text-light">
            <Hero />

            <ShowcaseSection heading="Core Innovations" class="py-24 bg-gradient-to-br from-secondary to-neutral">
                {feature_items(&CORE_INNOVATIONS)}
            </ShowcaseSection>

            <ShowcaseSection heading="UI Elements Showcase" class="py-24 relative">
                {HOME_SHOWCASE
                    .iter()
                    .map(|demo| view! {
                        <RevealItem>
                            <ComponentCard demo=*demo class="bg-light/5 border-accent/20 hover:border-accent" />
                        </RevealItem>
                    })
                    .collect_view()}
            </ShowcaseSection>

            <ShowcaseSection heading="Investment Tiers" class="py-24 bg-gradient-to-br from-neutral to-secondary">
                {HOME_PLANS
                    .iter()
                    .map(|plan| view! {
                        <RevealItem>
                            <PricingTier plan=*plan />
                        </RevealItem>
                    })
                    .collect_view()}
            </ShowcaseSection>

            <ShowcaseSection heading="Voices of Innovation" class="py-24" grid="grid md:grid-cols-2 gap-12">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! {
                        <RevealItem>
                            <TestimonialCard testimonial=*testimonial />
                        </RevealItem>
                    })
                    .collect_view()}
            </ShowcaseSection>

            <ShowcaseSection heading="Why Choose Tailwind UI" class="py-24 bg-gradient-to-br from-secondary to-neutral">
                {feature_items(&WHY_CHOOSE)}
            </ShowcaseSection>

            // Call to action
            <RevealSection
                preset=RevealPreset::Section
                stagger=item_stagger()
                class="py-24 bg-gradient-to-r from-primary to-accent text-light text-center relative"
            >
                <div class="max-w-4xl mx-auto px-8 relative z-10">
                    <RevealItem>
                        <h2 class="text-5xl font-extrabold mb-8 tracking-wide uppercase">"Ignite Your Project"</h2>
                    </RevealItem>
                    <RevealItem>
                        <p class="text-xl mb-12 max-w-3xl mx-auto">
                            "Embrace the future of web design with our cutting-edge Tailwind UI toolkit. Start building today!"
                        </p>
                    </RevealItem>
                    <RevealItem>
                        <A
                            href=ViewId::SignUp.path()
                            attr:class="inline-block bg-light text-secondary px-10 py-5 rounded-full font-bold text-xl shadow-lg transition-transform hover:scale-110 active:scale-90"
                        >
                            "Launch Now"
                        </A>
                    </RevealItem>
                </div>
            </RevealSection>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_lists_home_plans() {
        let data = structured_data();
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["url"], SITE_URL);

        let offers = data["offers"].as_array().unwrap();
        assert_eq!(offers.len(), HOME_PLANS.len());
        assert_eq!(offers[1]["name"], "Advanced");
        assert_eq!(offers[1]["price"], "$39/mo");
        assert_eq!(offers[1]["@type"], "Offer");
    }
}
