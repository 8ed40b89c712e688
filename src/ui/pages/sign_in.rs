use leptos::prelude::*;

use crate::core::forms::{FormKind, Notifier};
use crate::core::motion::RevealPreset;
use crate::core::sequencer::ActivationMode;
use crate::ui::common::{FormField, PlaceholderForm, collect_fields};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::pages::item_stagger;
use crate::ui::reveal::{RevealItem, RevealSection};

pub const FORGOT_PASSWORD_MESSAGE: &str = "Password recovery (Placeholder)";

/// Placeholder sign-in form. Nothing is authenticated.
#[component]
pub fn SignInPage() -> impl IntoView {
    let form = PlaceholderForm::new(FormKind::SignIn);
    let notifier = use_notifications();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(collect_fields(&[("email", email), ("password", password)]));
    };

    view! {
        <RevealSection
            mode=ActivationMode::Immediate
            stagger=item_stagger()
            class="max-w-6xl mx-auto px-6 py-20 bg-neutral relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-accent/10 animate-glow"></div>

            <RevealItem>
                <h1 class="text-5xl font-extrabold text-center mb-12 tracking-wide uppercase bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent">
                    "Sign In"
                </h1>
            </RevealItem>

            <form
                class="max-w-md mx-auto bg-secondary/20 backdrop-blur-lg p-8 rounded-3xl border border-light/10 shadow-2xl relative z-10"
                style=move || form.style()
                on:submit=on_submit
            >
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField name="email" input_type="email" placeholder="Email" icon=icons::ENVELOPE value=email />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField name="password" input_type="password" placeholder="Password" icon=icons::LOCK value=password />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <button
                        type="button"
                        class="text-accent text-sm hover:underline"
                        on:click=move |_| notifier.notify(FORGOT_PASSWORD_MESSAGE)
                    >
                        "Forgot Password?"
                    </button>
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem>
                    <button
                        type="submit"
                        class="bg-accent text-secondary px-8 py-4 rounded-full font-bold w-full flex items-center justify-center gap-2 transition-transform hover:scale-105 active:scale-95"
                        disabled=move || form.is_submitting()
                    >
                        "Sign In"
                        <Icon name=icons::ARROW_RIGHT />
                    </button>
                </RevealItem>
            </form>
        </RevealSection>
    }
}
