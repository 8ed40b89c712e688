use leptos::prelude::*;

use crate::core::catalog::{CONTACT_DETAILS, ContactChannel};
use crate::core::forms::FormKind;
use crate::core::sequencer::ActivationMode;
use crate::ui::common::{FormField, PlaceholderForm, TextAreaField, collect_fields};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::{PageHeading, item_stagger};
use crate::ui::reveal::{RevealItem, RevealSection};

fn channel_icon(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::Email => icons::ENVELOPE,
        ContactChannel::Phone => icons::PHONE,
        ContactChannel::Address => icons::MAP_PIN,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = PlaceholderForm::new(FormKind::Contact);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(collect_fields(&[
            ("name", name),
            ("email", email),
            ("message", message),
        ]));
    };

    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=item_stagger()
            class="max-w-7xl mx-auto px-4 py-16 bg-neutral"
        >
            <PageHeading
                title="Contact Us"
                intro="Get in touch for custom components, support, or collaborations. We're here to help with your Tailwind UI needs."
            />

            <div class="grid md:grid-cols-2 gap-12">
                <RevealItem>
                    <h2 class="text-3xl font-bold text-light mb-8">"Our Details"</h2>
                    <div class="space-y-6">
                        {CONTACT_DETAILS
                            .iter()
                            .map(|detail| view! {
                                <div class="flex items-center gap-4">
                                    <span class="text-primary">
                                        <Icon name=channel_icon(detail.channel) class="w-6 h-6" />
                                    </span>
                                    <p class="text-midgray">{detail.value}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealItem>

                <RevealItem>
                    <form
                        class="backdrop-blur-md bg-secondary/30 p-8 rounded-2xl border border-light/10 space-y-6"
                        style=move || form.style()
                        on:submit=on_submit
                    >
                        <FormField name="name" placeholder="Name" value=name />
                        <FormField name="email" input_type="email" placeholder="Email" value=email />
                        <TextAreaField name="message" placeholder="Message" value=message />
                        <button
                            type="submit"
                            class="bg-primary text-light px-6 py-3 rounded-full font-bold w-full transition-transform hover:scale-105 active:scale-95"
                            disabled=move || form.is_submitting()
                        >
                            "Send Message"
                        </button>
                    </form>
                </RevealItem>
            </div>
        </RevealSection>
    }
}
