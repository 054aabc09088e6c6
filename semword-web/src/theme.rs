//! Dark mode switch, persisted in `localStorage`.
use semword_game::{COLOR_SCHEME_KEY, ColorScheme};

const DARK_CLASS: &str = "dark";

/// Scheme to start with: the saved choice, else the OS preference.
#[must_use]
pub fn initial_scheme() -> ColorScheme {
    let stored = crate::dom::local_storage()
        .and_then(|storage| storage.get_item(COLOR_SCHEME_KEY).ok().flatten());
    ColorScheme::initial(stored.as_deref(), crate::dom::prefers_dark_scheme())
}

/// Reflect `scheme` on the `<html>` element.
pub fn apply_scheme(scheme: ColorScheme) {
    if let Some(html) = crate::dom::root_element() {
        let classes = html.class_list();
        let _ = if scheme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
}

/// Flip the scheme, apply it and save the explicit choice.
pub fn toggle_scheme(current: ColorScheme) -> ColorScheme {
    let next = current.toggled();
    apply_scheme(next);
    match crate::dom::local_storage() {
        Some(storage) => {
            if let Err(err) = storage.set_item(COLOR_SCHEME_KEY, next.as_str()) {
                log::warn!(
                    "could not persist color scheme: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        }
        None => log::warn!("localStorage unavailable; color scheme not saved"),
    }
    next
}
