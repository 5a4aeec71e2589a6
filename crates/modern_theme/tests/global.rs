use modern_theme::{
    Brand, DesignFoundations, DesignSystem, MemoryPreferences, PreferenceKey, Theme, ThemeError,
};

// The global instance is process-wide; keep every check in one test.
#[test]
fn global_instance_is_installed_once() {
    assert!(DesignSystem::try_get().is_none());

    assert!(matches!(
        DesignSystem::init(
            Vec::new(),
            DesignFoundations::modern(),
            MemoryPreferences::new()
        ),
        Err(ThemeError::NoBrands)
    ));
    assert!(DesignSystem::try_get().is_none());

    let store =
        MemoryPreferences::with_values([(PreferenceKey::ExplicitTheme, "dark".to_string())]);
    DesignSystem::init(vec![Brand::modern()], DesignFoundations::modern(), store).unwrap();
    let installed = DesignSystem::try_get().expect("installed");
    assert!(std::ptr::eq(installed, DesignSystem::get()));
    assert_eq!(installed.preferences().theme, Theme::Dark);

    DesignSystem::init_default();
    assert_eq!(DesignSystem::get().preferences().theme, Theme::Dark);
}
