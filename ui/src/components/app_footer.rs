use crate::core::nav;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Footer stylesheet (linked as an asset, inlined in release native builds)
const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");
const FOOTER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/footer.css"
));

/// Platforms register a `FooterBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know the platform's `Route` enum.
///
/// When a builder is registered, `AppFooter` renders localized labels
/// *inside* each supplied link and wraps them in the static nav list from
/// [`crate::core::nav`], marking the entry that matches `current_path`.
///
/// Without a registered builder the component falls back to any raw
/// `children` passed, so plain anchors keep working.
///
/// Wiring for a platform crate:
/// 1. Define one function per nav entry returning a
///    `Link { to: Route::..., class: "footer__link", ... }`.
/// 2. Call `ui::components::app_footer::register_footer(builder)` before
///    rendering the root.
/// 3. Render `AppFooter { current_path }` inside the routed layout.
///
/// The language selector triggers a re-render via a local signal; every
/// render pulls fresh localized strings.
pub struct FooterBuilder {
    // Each closure must return a Link (or element styled as a footer link)
    // whose children will be exactly the localized label string passed in.
    pub home: fn(label: &str) -> Element,
    pub report: fn(label: &str) -> Element,
    pub alerts: fn(label: &str) -> Element,
}

static FOOTER_BUILDER: OnceCell<FooterBuilder> = OnceCell::new();

pub fn register_footer(builder: FooterBuilder) {
    let _ = FOOTER_BUILDER.set(builder);
}

fn item_class(active: bool) -> &'static str {
    if active {
        "footer__item footer__item--active"
    } else {
        "footer__item"
    }
}

#[component]
pub fn AppFooter(current_path: String, children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain global language code signal if the platform (web crate) provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppFooter render lang={} path={current_path}", code());
        } else {
            println!("[i18n] AppFooter render lang=<none> path={current_path}");
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            // Update local select state
            current_lang.set(val.clone());
            // Propagate to global language code signal if the platform provided one
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    // The active entry is resolved by the pure helper; rendering only
    // applies the resulting index as a CSS modifier.
    let active = nav::active_index(&current_path, nav::NAV_ITEMS);

    // Build the internal localized nav list if a builder is registered.
    let internal_nav: Option<VNode> = FOOTER_BUILDER.get().map(|b| {
        let entries = [
            (b.home)(&t!("nav-home")),
            (b.report)(&t!("nav-report")),
            (b.alerts)(&t!("nav-alerts")),
        ];

        rsx! {
            ul { class: "footer__links",
                for (idx, link) in entries.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: item_class(active == Some(idx)),
                        {link}
                    }
                }
            }
        }
        .expect("AppFooter: rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        // Include footer stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: FOOTER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{FOOTER_CSS_INLINE}" }
        }

        footer {
            id: "footer",
            class: "footer",
            // Hidden marker ensures AppFooter re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "footer__inner",
                // Brand
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "Vigil" }
                    span { class: "footer__brand-subtitle", "{tagline}" }
                }

                // Social / source link
                div { class: "footer__social",
                    a {
                        class: "footer__social-link",
                        href: "https://github.com/vigil-app/vigil",
                        target: "_blank",
                        rel: "noreferrer",
                        aria_label: t!("footer-source-label"),
                        "GitHub"
                    }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav_list) = internal_nav {
                    {nav_list}
                } else {
                    ul { class: "footer__links", {children} }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "footer__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }

                // Copyright
                div { class: "footer__copyright",
                    p { {t!("footer-copyright")} }
                }
            }
        }
    }
}
