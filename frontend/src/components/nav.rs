use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Header compacts once the page scrolls past this many pixels.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Servicos,
    Sobre,
    Contato,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Inicio,
        Section::Servicos,
        Section::Sobre,
        Section::Contato,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Início",
            Section::Servicos => "Serviços",
            Section::Sobre => "Sobre",
            Section::Contato => "Contato",
        }
    }

    /// Element id of the section anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Servicos => "servicos",
            Section::Sobre => "sobre",
            Section::Contato => "contato",
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

/// Smooth-scrolls to a section. Missing elements are ignored.
pub fn scroll_to_section(section: Section) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        debug!("No element for section #{}", section.id());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scrolled.set(is_scrolled(scroll_window.scroll_y().unwrap_or(0.0)));
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(section);
        })
    };

    let links = |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                html! {
                    <button key={section.id()} class={class} onclick={go_to(section)}>
                        {section.label()}
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("top-nav", (*scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-badge">{"🐶"}</span>
                    <span>{"Pet"}<span class="brand-accent">{"Green"}</span></span>
                </div>

                <nav class="nav-links">
                    { links("nav-link") }
                </nav>

                <button class="nav-cta" onclick={go_to(Section::Contato)}>
                    {"📞 Agendar"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then_some("mobile-menu-open"))}>
                <nav>
                    { links("mobile-link") }
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_ascii_labels() {
        for section in Section::ALL {
            let folded: String = section
                .label()
                .to_lowercase()
                .chars()
                .map(|c| match c {
                    'í' => 'i',
                    'ç' => 'c',
                    other => other,
                })
                .collect();
            assert_eq!(folded, section.id());
        }
    }

    #[test]
    fn section_order_matches_page() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["inicio", "servicos", "sobre", "contato"]);
    }

    #[test]
    fn scrolled_strictly_after_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
