use leptos::prelude::*;

use crate::core::catalog::Testimonial;
use crate::ui::icon::{Icon, icons};

const MAX_RATING: u8 = 5;

/// First letter of the author, shown in the avatar bubble.
fn initial(author: &str) -> String {
    author.chars().next().map(String::from).unwrap_or_default()
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = testimonial.rating.min(MAX_RATING);

    view! {
        <div class="card-hover relative p-8 bg-secondary/20 backdrop-blur-lg border border-light/10 rounded-3xl overflow-hidden h-full">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-accent/10 animate-glow"></div>

            <div class="w-16 h-16 bg-accent/30 rounded-full mx-auto mb-6 flex items-center justify-center relative z-10">
                <span class="text-light text-2xl font-bold">{initial(testimonial.author)}</span>
            </div>

            <p class="text-light italic text-base mb-6 max-w-xs mx-auto relative z-10">
                {format!("\"{}\"", testimonial.quote)}
            </p>
            <p class="text-light font-semibold text-lg mb-4 relative z-10">{testimonial.author}</p>

            <div class="flex justify-center gap-1 relative z-10" aria-label=format!("{} out of {} stars", stars, MAX_RATING)>
                {(0..stars)
                    .map(|_| view! { <Icon name=icons::STAR class="w-5 h-5 text-accent" /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_handles_empty_author() {
        assert_eq!(initial("Alex Rivera"), "A");
        assert_eq!(initial(""), "");
    }
}
