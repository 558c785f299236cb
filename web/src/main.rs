use dioxus::prelude::*;

use ui::components::app_footer::{register_footer, FooterBuilder};
use ui::components::AppFooter;
use ui::views::{Alerts, Home, Report};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/report")]
    Report {},
    #[route("/alerts")]
    Alerts {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn footer_home(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::Home {},
        "{label}"
    })
}
fn footer_report(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::Report {},
        "{label}"
    })
}
fn footer_alerts(label: &str) -> Element {
    rsx!(Link {
        class: "footer__link",
        to: Route::Alerts {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized footer link builder
        register_footer(FooterBuilder {
            home: footer_home,
            report: footer_report,
            alerts: footer_alerts,
        });
    }

    // Provide global reactive language code signal. AppFooter updates it on
    // language selection so routed views re-render with fresh strings.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific shell around the shared `AppFooter` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    let route: Route = use_route();
    let current_path = route.to_string();

    rsx! {
        main { class: "site-main",
            Outlet::<Route> {}
        }
        AppFooter { current_path }
    }
}
