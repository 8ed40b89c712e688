use leptos::prelude::*;

use crate::core::catalog::{MILESTONES, TEAM};
use crate::core::motion::RevealPreset;
use crate::core::sequencer::ActivationMode;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::{PageHeading, item_stagger};
use crate::ui::reveal::{RevealItem, RevealSection};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 py-16 bg-neutral">
            <RevealSection mode=ActivationMode::Immediate stagger=item_stagger()>
                <PageHeading title="About Us" />
            </RevealSection>

            // Mission
            <RevealSection preset=RevealPreset::Section stagger=item_stagger() class="mb-16">
                <div class="grid md:grid-cols-2 gap-12">
                    <RevealItem>
                        <span class="text-primary block mb-6">
                            <Icon name=icons::LIGHT_BULB class="w-16 h-16" />
                        </span>
                        <h2 class="text-3xl font-bold text-light mb-4">"Our Mission"</h2>
                        <p class="text-lg text-midgray">
                            "To empower developers with high-quality, customizable Tailwind UI components that accelerate development while maintaining modern, animated designs. We focus on dark-themed interfaces for a sleek, professional look."
                        </p>
                    </RevealItem>
                    <RevealItem class="backdrop-blur-md bg-secondary/30 p-8 rounded-2xl border border-light/10">
                        <p class="text-midgray">"Join us in revolutionizing UI development with Tailwind CSS."</p>
                    </RevealItem>
                </div>
            </RevealSection>

            // Journey
            <RevealSection preset=RevealPreset::Section stagger=item_stagger() class="mb-16">
                <RevealItem>
                    <h2 class="text-3xl font-bold text-light mb-8 text-center">"Our Journey"</h2>
                </RevealItem>
                <div class="space-y-8">
                    {MILESTONES
                        .iter()
                        .map(|milestone| view! {
                            <RevealItem class="flex items-center gap-4">
                                <div class="w-4 h-4 bg-accent rounded-full shrink-0"></div>
                                <p class="text-lg text-midgray">
                                    {format!("{}: {}", milestone.year, milestone.summary)}
                                </p>
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </RevealSection>

            // Team
            <RevealSection preset=RevealPreset::Section stagger=item_stagger()>
                <RevealItem>
                    <h2 class="text-3xl font-bold text-light mb-8 text-center">"Our Team"</h2>
                </RevealItem>
                <div class="grid md:grid-cols-3 gap-8">
                    {TEAM
                        .iter()
                        .map(|member| view! {
                            <RevealItem class="text-center backdrop-blur-md bg-secondary/30 p-6 rounded-2xl border border-light/10">
                                <span class="text-primary flex justify-center mb-4">
                                    <Icon name=icons::USERS class="w-10 h-10" />
                                </span>
                                <h3 class="text-xl font-bold text-light">{member.name}</h3>
                                <p class="text-midgray">{member.role}</p>
                                <p class="text-sm text-midgray mt-2">{member.bio}</p>
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </RevealSection>
        </div>
    }
}
