//! Help page with the FAQ accordion.

use leptos::prelude::*;

use crate::core::accordion::Accordion;
use crate::core::catalog::HELP_FAQ;
use crate::core::sequencer::ActivationMode;
use crate::ui::pages::{PageHeading, item_stagger};
use crate::ui::reveal::{RevealItem, RevealSection};

/// Marker shown next to a question
fn marker(open: bool) -> &'static str {
    if open { "-" } else { "+" }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(HELP_FAQ.len()));

    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=item_stagger()
            class="max-w-7xl mx-auto px-4 py-16 bg-neutral"
        >
            <PageHeading
                title="Help & FAQs"
                intro="Find answers to common questions about our Tailwind UI components, installation, and usage."
            />

            <div class="max-w-3xl mx-auto">
                {HELP_FAQ
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_open = move || accordion.with(|a| a.is_open(index));
                        let panel_id = format!("faq-answer-{}", index);
                        let controls = panel_id.clone();
                        view! {
                            <RevealItem class="mb-6 backdrop-blur-md bg-secondary/30 p-4 rounded-2xl border border-light/10">
                                <button
                                    class="w-full text-left text-xl font-semibold text-light flex justify-between items-center"
                                    aria-expanded=move || is_open().to_string()
                                    aria-controls=controls
                                    on:click=move |_| accordion.update(|a| a.toggle(index))
                                >
                                    {entry.question}
                                    <span aria-hidden="true">{move || marker(is_open())}</span>
                                </button>
                                <Show when=is_open>
                                    <div id=panel_id.clone() class="faq-answer-enter text-midgray mt-4">
                                        {entry.answer}
                                    </div>
                                </Show>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_follows_accordion_state() {
        let mut accordion = Accordion::new(HELP_FAQ.len());
        accordion.toggle(2);

        let markers: Vec<_> = (0..HELP_FAQ.len()).map(|i| marker(accordion.is_open(i))).collect();
        assert_eq!(markers.iter().filter(|m| **m == "-").count(), 1);
        assert_eq!(markers[2], "-");

        accordion.toggle(2);
        assert!((0..HELP_FAQ.len()).all(|i| marker(accordion.is_open(i)) == "+"));
    }
}
