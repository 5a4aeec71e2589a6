use modern_theme::{
    available_color_sets, color_set_named, Appearance, Brand, ColorSetName, ColorToken,
    DesignFoundations, DesignSystem, MemoryPreferences, PreferenceKey, PreferenceStore, Theme,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn gallery_lists_twelve_distinct_sets() {
    let mut names: Vec<&str> = available_color_sets()
        .iter()
        .map(|set| set.name.display_name())
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 12);
}

#[test]
fn unknown_name_falls_back_to_modern_blue_light() {
    for name in ["", "modern blue", "Ocean Breeze Dark", "Neon"] {
        let set = color_set_named(name);
        assert_eq!(set.name, ColorSetName::ModernBlue, "lookup of {:?}", name);
        assert_eq!(set.scheme, Appearance::Light);
    }
}

#[test]
fn applied_color_set_becomes_current() {
    let system = DesignSystem::default();
    assert_eq!(system.current_color_set().name, ColorSetName::ModernBlue);

    let ocean_dark = ColorSetName::OceanBreezeDark.color_set();
    system.apply_color_set(&ocean_dark);

    let current = system.current_color_set();
    assert_eq!(current.name, ColorSetName::OceanBreezeDark);
    assert_eq!(current, ocean_dark);
}

#[test]
fn color_set_selection_is_persisted_and_restored() {
    let store = Arc::new(MemoryPreferences::new());
    let system = DesignSystem::new(
        vec![Brand::modern()],
        DesignFoundations::modern(),
        Arc::clone(&store),
    )
    .unwrap();
    system.select_color_set_named("Sunset Orange - Dark");
    assert_eq!(
        store.get(PreferenceKey::SelectedColorSet).as_deref(),
        Some("Sunset Orange - Dark")
    );

    let restored = DesignSystem::new(
        vec![Brand::modern()],
        DesignFoundations::modern(),
        Arc::clone(&store),
    )
    .unwrap();
    assert_eq!(
        restored.current_color_set().name,
        ColorSetName::SunsetOrangeDark
    );
}

#[test]
fn color_sets_do_not_affect_brand_resolution() {
    let system = DesignSystem::default();
    let before = system.color_token(
        Some(modern_theme::SemanticRole::Primary),
        Appearance::Light,
        false,
    );
    system.select_color_set(ColorSetName::CharcoalDark);
    let after = system.color_token(
        Some(modern_theme::SemanticRole::Primary),
        Appearance::Light,
        false,
    );
    assert_eq!(before, after);
    assert_eq!(system.theme_for(Appearance::Light, false), Theme::Light);
}

#[test]
fn subscribers_observe_color_set_changes() {
    let system = DesignSystem::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    system.subscribe(move |snapshot| {
        sink.lock().unwrap().push(snapshot.current_color_set().name);
    });

    system.select_color_set_named("Forest Green");
    system.select_color_set_named("no such set");

    assert_eq!(
        *seen.lock().unwrap(),
        vec![ColorSetName::ForestGreen, ColorSetName::ModernBlue]
    );
}

#[test]
fn light_gallery_entries_use_six_digit_hex() {
    let forest = ColorSetName::ForestGreen.color_set();
    assert_eq!(forest.primary_background, ColorToken::from_hex(0xFAFFFA));

    let ocean = ColorSetName::OceanBreeze.color_set();
    assert_eq!(ocean.quaternary_label, ColorToken::from_hex(0xAAAAAA));
}
