#![cfg(target_arch = "wasm32")]

use semword_game::{COLOR_SCHEME_KEY, ColorScheme};
use semword_web::{dom, theme};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_has_dark_class() -> bool {
    dom::root_element()
        .expect("html element")
        .class_list()
        .contains("dark")
}

#[wasm_bindgen_test]
fn toggling_scheme_persists_choice() {
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(COLOR_SCHEME_KEY);

    let next = theme::toggle_scheme(ColorScheme::Light);
    assert_eq!(next, ColorScheme::Dark);
    assert!(root_has_dark_class());
    assert_eq!(
        storage.get_item(COLOR_SCHEME_KEY).ok().flatten().as_deref(),
        Some(ColorScheme::Dark.as_str())
    );
    assert_eq!(theme::initial_scheme(), ColorScheme::Dark);

    theme::toggle_scheme(next);
    assert!(!root_has_dark_class());
}
