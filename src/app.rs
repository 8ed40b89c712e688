use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::route::RouteTable;
use crate::ui::common::{Footer, Navbar};
use crate::ui::notifications::{NotificationsContainer, provide_notifications};
use crate::ui::pages::{NotFoundPage, PageView};
use crate::ui::reveal::RevealBoundary;

const NOT_FOUND_TITLE: &str = "Page Not Found | Componix UI";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="bg-neutral">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-neutral text-light font-sans antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let notifications = provide_notifications();
    provide_context(RouteTable::site());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/componix.css"/>

        <Router>
            // Navbar and footer share one scope that lives as long as the app
            <RevealBoundary>
                <Navbar />
                <main class="pt-20">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/*any") view=RoutedView />
                    </Routes>
                </main>
                <Footer />
            </RevealBoundary>
        </Router>

        <NotificationsContainer notifications=notifications.notifications() />
    }
}

/// Resolves the current path against the site table and mounts the view in
/// a fresh reveal scope. Changing the path disposes the old scope.
#[component]
fn RoutedView() -> impl IntoView {
    let location = use_location();
    let routes = expect_context::<RouteTable>();
    let resolved = Memo::new(move |_| location.pathname.with(|path| routes.resolve(path)));

    move || match resolved.get() {
        Ok(id) => view! {
            <RevealBoundary>
                <Title text=id.title() />
                <PageView id=id />
            </RevealBoundary>
        }
        .into_any(),
        Err(err) => {
            tracing::debug!("{}", err);
            view! {
                <RevealBoundary>
                    <Title text=NOT_FOUND_TITLE />
                    <NotFoundPage />
                </RevealBoundary>
            }
            .into_any()
        }
    }
}
