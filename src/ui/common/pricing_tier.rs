use leptos::prelude::*;

use crate::core::catalog::PricingPlan;
use crate::core::forms::Notifier;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Prices that are not a monthly amount
fn is_monthly(price: &str) -> bool {
    price.starts_with('$') && !price.ends_with("/mo")
}

#[component]
pub fn PricingTier(plan: PricingPlan) -> impl IntoView {
    let notifier = use_notifications();
    let highlighted = plan.variant.is_highlighted();

    let card_class = format!(
        "card-hover relative p-8 bg-secondary/20 backdrop-blur-lg border {} rounded-3xl text-center overflow-hidden h-full {}",
        if highlighted { "border-accent/50" } else { "border-light/10" },
        if highlighted { "scale-105" } else { "" },
    );
    let button_class = format!(
        "flex items-center gap-2 mx-auto {} px-6 py-3 rounded-full font-bold hover:bg-primary hover:text-light transition-all hover:scale-105 active:scale-95 relative z-10",
        if highlighted {
            "bg-accent text-secondary"
        } else {
            "bg-transparent border border-accent text-accent"
        },
    );

    view! {
        <div class=card_class>
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-accent/10 animate-glow"></div>

            {highlighted.then(|| view! {
                <div class="absolute top-4 right-4 bg-accent text-secondary text-xs font-bold uppercase px-3 py-1 rounded-full">
                    "Popular"
                </div>
            })}

            <h3 class="text-2xl font-bold mb-4 tracking-wide uppercase bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent relative z-10">
                {plan.tier}
            </h3>

            <p class="text-3xl font-extrabold text-light mb-6 relative z-10">
                {plan.price}
                {is_monthly(plan.price).then(|| view! {
                    <span class="text-sm text-midgray font-normal">" /month"</span>
                })}
            </p>

            <ul class="text-midgray text-sm mb-8 max-w-xs mx-auto relative z-10">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center gap-2 mb-3 justify-center">
                            <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-accent" />
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>

            <button class=button_class on:click=move |_| notifier.notify(&plan.choose_message())>
                "Choose Plan"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_suffix_only_for_bare_amounts() {
        assert!(is_monthly("$0"));
        assert!(!is_monthly("$29/mo"));
        assert!(!is_monthly("Contact Us"));
        assert!(!is_monthly("Inquire"));
    }
}
