use leptos::prelude::*;

use crate::core::catalog::COMPONENT_LIBRARY;
use crate::core::sequencer::ActivationMode;
use crate::ui::common::ComponentCard;
use crate::ui::pages::{PageHeading, item_stagger};
use crate::ui::reveal::{RevealItem, RevealSection};

/// Component library: one card per catalog entry
#[component]
pub fn ComponentsPage() -> impl IntoView {
    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=item_stagger()
            class="max-w-7xl mx-auto px-4 py-16 bg-neutral"
        >
            <PageHeading
                title="Component Library"
                intro="Explore our collection of modern, animated Tailwind UI components. Each is customizable, responsive, and ready for dark themes."
            />

            <div class="grid md:grid-cols-3 gap-8">
                {COMPONENT_LIBRARY
                    .iter()
                    .map(|demo| view! {
                        <RevealItem>
                            <ComponentCard demo=*demo />
                        </RevealItem>
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    use crate::ui::notifications::provide_notifications;
    use crate::ui::reveal::RevealBoundary;

    #[test]
    fn test_renders_one_card_per_library_entry() {
        let owner = Owner::new();
        owner.with(|| {
            provide_notifications();
            let html = view! {
                <RevealBoundary>
                    <ComponentsPage />
                </RevealBoundary>
            }
            .to_html();

            assert_eq!(html.matches("data-demo-id=").count(), COMPONENT_LIBRARY.len());
            for demo in COMPONENT_LIBRARY {
                assert!(html.contains(&format!("data-demo-id=\"{}\"", demo.id)));
            }
            assert!(html.contains("Component Library"));
        });
    }
}
