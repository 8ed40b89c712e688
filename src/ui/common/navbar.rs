use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::RevealPreset;
use crate::core::route::ViewId;
use crate::core::sequencer::{ActivationMode, Stagger};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{RevealItem, RevealSection};

/// Fixed top navigation with a collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let close_menu = move |_| set_mobile_menu_open.set(false);

    view! {
        <nav class="fixed w-full z-20 bg-secondary/30 backdrop-blur-lg border-b border-light/10 shadow-lg">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                // Logo
                <A href="/" attr:class="text-3xl font-extrabold text-light bg-clip-text bg-gradient-to-r from-primary to-accent">
                    "Componix UI"
                </A>

                // Desktop Navigation
                <ul class="hidden md:flex items-center space-x-8">
                    {ViewId::NAV
                        .iter()
                        .map(|view| {
                            view! {
                                <li class="transition-transform hover:scale-110 active:scale-95">
                                    <A href=view.path() attr:class="text-light hover:text-accent font-medium">
                                        {view.label()}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="transition-transform hover:scale-110 active:scale-95">
                        <A href=ViewId::SignIn.path() attr:class="text-light hover:text-accent font-medium">
                            {ViewId::SignIn.label()}
                        </A>
                    </li>
                    <li class="transition-transform hover:scale-110 active:scale-95">
                        <A
                            href=ViewId::SignUp.path()
                            attr:class="bg-accent text-secondary px-5 py-2 rounded-full font-bold hover:bg-primary hover:text-light transition-all"
                        >
                            {ViewId::SignUp.label()}
                        </A>
                    </li>
                </ul>

                // Mobile menu button
                <button
                    class="md:hidden text-3xl text-light transition-transform hover:scale-110 active:scale-90"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-7 h-7" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-7 h-7" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || mobile_menu_open.get()>
                <div class="md:hidden bg-secondary/80 backdrop-blur-lg border-t border-light/10 nav-menu-enter">
                    <RevealSection
                        mode=ActivationMode::Immediate
                        stagger=Stagger::new(80.0)
                        class="py-6"
                    >
                        <ul class="flex flex-col items-center space-y-6">
                            {ViewId::NAV
                                .iter()
                                .map(|view| {
                                    view! {
                                        <li>
                                            <RevealItem preset=RevealPreset::MenuItem>
                                                <A
                                                    href=view.path()
                                                    attr:class="text-light text-lg font-medium hover:text-accent"
                                                    on:click=close_menu
                                                >
                                                    {view.label()}
                                                </A>
                                            </RevealItem>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li>
                                <RevealItem preset=RevealPreset::MenuItem>
                                    <A
                                        href=ViewId::SignIn.path()
                                        attr:class="text-light text-lg font-medium hover:text-accent"
                                        on:click=close_menu
                                    >
                                        {ViewId::SignIn.label()}
                                    </A>
                                </RevealItem>
                            </li>
                            <li>
                                <RevealItem preset=RevealPreset::MenuItem>
                                    <A
                                        href=ViewId::SignUp.path()
                                        attr:class="bg-accent text-secondary px-6 py-3 rounded-full font-bold text-lg hover:bg-primary hover:text-light"
                                        on:click=close_menu
                                    >
                                        {ViewId::SignUp.label()}
                                    </A>
                                </RevealItem>
                            </li>
                        </ul>
                    </RevealSection>
                </div>
            </Show>
        </nav>
    }
}
