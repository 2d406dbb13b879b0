use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::interactions::scroll;

/// Overflow value the body gets while the mobile menu is open. `None`
/// releases the scroll lock.
pub fn body_overflow(menu_open: bool) -> Option<&'static str> {
    menu_open.then(|| "hidden")
}

/// Top navigation: fragment links into the landing sections, a burger menu
/// on small screens, and a background switch once the page scrolls past the
/// threshold.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_handle = window.clone();

            // Run once on mount so a reloaded mid-page view starts correct.
            is_scrolled.set(scroll::is_scrolled(window.page_y_offset().unwrap_or(0.0)));

            let scroll_callback = Closure::wrap(Box::new(move || {
                let offset = window_handle.page_y_offset().unwrap_or(0.0);
                is_scrolled.set(scroll::is_scrolled(offset));
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, ());
    }

    // Scroll lock and outside-click close follow the open state.
    {
        let menu_open_state = menu_open.clone();
        use_effect_with_deps(move |open: &bool| {
            let document = web_sys::window().unwrap().document().unwrap();

            if let Some(body) = document.body() {
                match body_overflow(*open) {
                    Some(value) => {
                        let _ = body.style().set_property("overflow", value);
                    }
                    None => {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            }

            let open = *open;
            let listener_document = document.clone();
            let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                if !open {
                    return;
                }
                if let Some(navbar) = listener_document.get_element_by_id("navbar") {
                    let clicked_inside = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                        .map(|node| navbar.contains(Some(&node)))
                        .unwrap_or(false);
                    if !clicked_inside {
                        menu_open_state.set(false);
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            document
                .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                document
                    .remove_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, *menu_open);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="navbar-container">
                <a href="#" class="navbar-logo">{"Clientist"}</a>

                <button
                    id="menuToggle"
                    class={classes!("menu-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div id="navMenu" class={classes!("navbar-nav", (*menu_open).then(|| "active"))}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#download" class="nav-link" onclick={close_menu.clone()}>{"Download"}</a>
                    <a href="#contact" class="nav-link" onclick={close_menu.clone()}>{"Contact"}</a>
                    <a href="#download" class="navbar-cta" onclick={close_menu}>{"Get Started"}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_releases_the_scroll_lock() {
        let mut open = false;

        open = !open;
        assert_eq!(body_overflow(open), Some("hidden"));

        open = !open;
        assert_eq!(body_overflow(open), None);
    }
}
