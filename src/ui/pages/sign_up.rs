use leptos::prelude::*;

use crate::core::forms::FormKind;
use crate::core::motion::RevealPreset;
use crate::core::sequencer::ActivationMode;
use crate::ui::common::{CheckboxField, FormField, PlaceholderForm, checkbox_value, collect_fields};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::item_stagger;
use crate::ui::reveal::{RevealItem, RevealSection};

/// Placeholder registration form. Requires the terms checkbox; creates nothing.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = PlaceholderForm::new(FormKind::SignUp);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let terms_accepted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut fields = collect_fields(&[
            ("username", username),
            ("email", email),
            ("password", password),
            ("confirm_password", confirm_password),
        ]);
        fields.insert("terms", checkbox_value(terms_accepted.get_untracked()));
        form.submit(fields);
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
                    "Join the Future"
                </h1>
            </RevealItem>

            <form
                class="max-w-md mx-auto bg-secondary/20 backdrop-blur-lg p-8 rounded-3xl border border-light/10 shadow-2xl relative z-10"
                style=move || form.style()
                on:submit=on_submit
            >
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField name="username" placeholder="Username" icon=icons::USER value=username />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField name="email" input_type="email" placeholder="Email" icon=icons::ENVELOPE value=email />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField name="password" input_type="password" placeholder="Password" icon=icons::LOCK value=password />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-6">
                    <FormField
                        name="confirm_password"
                        input_type="password"
                        placeholder="Confirm Password"
                        icon=icons::LOCK
                        value=confirm_password
                    />
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem class="mb-8">
                    <CheckboxField name="terms" checked=terms_accepted>
                        "I agree to the "
                        <span class="text-accent hover:underline">"Terms and Conditions"</span>
                    </CheckboxField>
                </RevealItem>
                <RevealItem preset=RevealPreset::FormItem>
                    <button
                        type="submit"
                        class="bg-accent text-secondary px-8 py-4 rounded-full font-bold w-full flex items-center justify-center gap-2 transition-transform hover:scale-105 active:scale-95"
                        disabled=move || form.is_submitting()
                    >
                        "Sign Up"
                        <Icon name=icons::CHECK_CIRCLE />
                    </button>
                </RevealItem>
            </form>
        </RevealSection>
    }
}
