use leptos::prelude::*;

use crate::core::catalog::{PRICING_FAQ, PRICING_PLANS};
use crate::core::motion::RevealPreset;
use crate::core::sequencer::ActivationMode;
use crate::ui::common::PricingTier;
use crate::ui::pages::{PageHeading, item_stagger};
use crate::ui::reveal::{RevealItem, RevealSection};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 py-16 bg-neutral">
            <RevealSection mode=ActivationMode::Immediate stagger=item_stagger()>
                <PageHeading
                    title="Pricing Plans"
                    intro="Choose a plan that fits your needs. All plans include access to our Tailwind UI components with dark theme support."
                />

                <div class="grid md:grid-cols-3 gap-8">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! {
                            <RevealItem>
                                <PricingTier plan=*plan />
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </RevealSection>

            // FAQ
            <RevealSection
                preset=RevealPreset::Section
                stagger=item_stagger()
                class="mt-16 text-center"
            >
                <RevealItem>
                    <h2 class="text-3xl font-bold text-light mb-8">"Frequently Asked Questions"</h2>
                </RevealItem>
                {PRICING_FAQ
                    .iter()
                    .map(|entry| view! {
                        <RevealItem preset=RevealPreset::FormItem>
                            <p class="text-midgray mb-4">{format!("{} {}", entry.question, entry.answer)}</p>
                        </RevealItem>
                    })
                    .collect_view()}
            </RevealSection>
        </div>
    }
}
