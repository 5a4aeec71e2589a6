//! Design system state
//!
//! [`DesignSnapshot`] is an immutable view of everything resolution depends
//! on: brands, the active brand, the global palette and the user's
//! preferences. [`DesignSystem`] owns the current snapshot and replaces it
//! wholesale on every change, so a reader holding a snapshot never sees a
//! partially applied update.
//!
//! Changes are persisted through the injected [`PreferenceStore`], then
//! subscribers are notified synchronously, then the redraw callback runs.

use crate::brand::Brand;
use crate::color_set::{ColorSet, ColorSetName};
use crate::error::{Result, ThemeError};
use crate::foundations::DesignFoundations;
use crate::preferences::{MemoryPreferences, PreferenceStore, Preferences};
use crate::theme::{Appearance, Theme};
use crate::tokens::*;
use modern_core::{Color, Font, Shadow};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, OnceLock, RwLock, RwLockWriteGuard};

/// Global design system instance
static DESIGN_SYSTEM: OnceLock<DesignSystem> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every state change, once subscribers have been notified.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

new_key_type! {
    /// Handle returned by [`DesignSystem::subscribe`]
    pub struct SubscriptionId;
}

type Subscriber = Arc<dyn Fn(&DesignSnapshot) + Send + Sync>;

/// Immutable resolution state
#[derive(Clone, Debug, PartialEq)]
pub struct DesignSnapshot {
    brands: Arc<[Brand]>,
    brand_index: usize,
    foundations: Arc<DesignFoundations>,
    preferences: Preferences,
}

impl DesignSnapshot {
    /// Build a snapshot over a non-empty brand list
    ///
    /// The first brand is active. An explicit theme the brand does not
    /// support is replaced by the brand's default theme.
    pub fn new(
        brands: Vec<Brand>,
        foundations: DesignFoundations,
        preferences: Preferences,
    ) -> Result<Self> {
        if brands.is_empty() {
            return Err(ThemeError::NoBrands);
        }
        Ok(Self::from_parts(brands.into(), foundations, preferences))
    }

    fn from_parts(
        brands: Arc<[Brand]>,
        foundations: DesignFoundations,
        preferences: Preferences,
    ) -> Self {
        Self {
            brands,
            brand_index: 0,
            foundations: Arc::new(foundations),
            preferences,
        }
        .clamped()
    }

    /// The active brand
    pub fn brand(&self) -> &Brand {
        &self.brands[self.brand_index]
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn foundations(&self) -> &DesignFoundations {
        &self.foundations
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    // ========== Theme ==========

    /// The theme resolution runs under
    ///
    /// Following the platform (forced, or by preference) maps `appearance`
    /// through the brand's system mapping; otherwise the explicit theme wins
    /// and `appearance` is ignored.
    pub fn theme_for(&self, appearance: Appearance, force_system: bool) -> Theme {
        if force_system || self.preferences.use_system_appearance {
            self.brand().system_theme_mapping().theme(appearance)
        } else {
            self.preferences.theme
        }
    }

    /// The appearance the UI should render with
    pub fn appearance_for(&self, appearance: Appearance, force_system: bool) -> Appearance {
        if force_system || self.preferences.use_system_appearance {
            appearance
        } else {
            self.preferences.theme.appearance()
        }
    }

    // ========== Colors ==========

    /// Resolve a semantic token to a palette color
    pub fn resolve_semantic_token(
        &self,
        token: &SemanticColorToken,
        appearance: Appearance,
        force_system: bool,
    ) -> ColorToken {
        let theme = self.theme_for(appearance, force_system);
        let path = token.for_theme(theme);
        tracing::trace!(
            "DesignSnapshot::resolve_semantic_token - {:?} -> {}",
            theme,
            path
        );
        self.foundations.global_colors.get(path)
    }

    /// Resolve a role to a palette color; no role resolves to the placeholder
    pub fn color_token(
        &self,
        role: Option<SemanticRole>,
        appearance: Appearance,
        force_system: bool,
    ) -> ColorToken {
        match role {
            Some(role) => self.resolve_semantic_token(
                self.brand().semantic_colors().get(role),
                appearance,
                force_system,
            ),
            None => ColorToken::PLACEHOLDER,
        }
    }

    /// Resolve a role to a renderable color
    ///
    /// No role renders as near-transparent white, unlike [`Self::color_token`]
    /// which hands back the black placeholder token.
    pub fn color(
        &self,
        role: Option<SemanticRole>,
        appearance: Appearance,
        force_system: bool,
    ) -> Color {
        match role {
            Some(_) => self.color_token(role, appearance, force_system).color(),
            None => Color::WHITE.with_alpha(ColorToken::PLACEHOLDER.opacity),
        }
    }

    // ========== Layout tokens ==========

    pub fn font_token(&self, role: FontRole) -> FontToken {
        *self.brand().typography().get(role)
    }

    /// Resolve a type role to a renderable font, scaled for the size class
    pub fn font(&self, role: FontRole, hints: SizeClassHints) -> Font {
        self.font_token(role).font(hints)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.brand().spacing().get(token)
    }

    pub fn elevation(&self, level: ElevationLevel) -> ElevationToken {
        *self.brand().elevation().get(level)
    }

    /// Elevation as a renderable shadow
    pub fn shadow(&self, level: ElevationLevel) -> Shadow {
        self.elevation(level).to_shadow()
    }

    // ========== Color sets ==========

    /// The selected color set
    pub fn current_color_set(&self) -> ColorSet {
        self.preferences.color_set.color_set()
    }

    fn clamped(mut self) -> Self {
        let brand = self.brand();
        if !brand.supports(self.preferences.theme) {
            let fallback = brand.default_theme();
            tracing::warn!(
                "DesignSnapshot - brand '{}' does not support {:?}, using {:?}",
                brand.name(),
                self.preferences.theme,
                fallback
            );
            self.preferences.theme = fallback;
        }
        self
    }
}

/// The design system controller
pub struct DesignSystem {
    snapshot: RwLock<Arc<DesignSnapshot>>,
    store: Box<dyn PreferenceStore>,
    /// Held from computing a change until its preferences are persisted
    publishing: Mutex<()>,
    subscribers: Mutex<SlotMap<SubscriptionId, Subscriber>>,
}

impl DesignSystem {
    /// Create a design system
    ///
    /// Preferences are loaded from `store`. If the first brand does not
    /// support the stored explicit theme, the theme is reset to the brand's
    /// first theme and the correction is written back.
    pub fn new(
        brands: Vec<Brand>,
        foundations: DesignFoundations,
        store: impl PreferenceStore + 'static,
    ) -> Result<Self> {
        let loaded = Preferences::load(&store);
        let snapshot = DesignSnapshot::new(brands, foundations, loaded)?;
        for key in snapshot.preferences.changed_keys(&loaded) {
            store.set(key, snapshot.preferences.value(key));
        }
        tracing::debug!(
            "DesignSystem::new - brand '{}' with {} brand(s), palette '{}'",
            snapshot.brand().name(),
            snapshot.brands.len(),
            snapshot.foundations.name
        );

        Ok(Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            store: Box::new(store),
            publishing: Mutex::new(()),
            subscribers: Mutex::new(SlotMap::with_key()),
        })
    }

    /// A design system over one brand with the default palette and an
    /// in-memory preference store
    pub fn with_brand(brand: Brand) -> Self {
        let snapshot = DesignSnapshot::from_parts(
            vec![brand].into(),
            DesignFoundations::modern(),
            Preferences::default(),
        );
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            store: Box::new(MemoryPreferences::new()),
            publishing: Mutex::new(()),
            subscribers: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Initialize the global design system
    ///
    /// Later calls are ignored once an instance is installed.
    pub fn init(
        brands: Vec<Brand>,
        foundations: DesignFoundations,
        store: impl PreferenceStore + 'static,
    ) -> Result<()> {
        let system = Self::new(brands, foundations, store)?;
        let _ = DESIGN_SYSTEM.set(system);
        Ok(())
    }

    /// Initialize the global design system with the Modern brand and palette
    pub fn init_default() {
        let _ = DESIGN_SYSTEM.set(Self::default());
    }

    /// Get the global design system instance
    pub fn get() -> &'static DesignSystem {
        DESIGN_SYSTEM
            .get()
            .expect("DesignSystem not initialized. Call DesignSystem::init() at app startup.")
    }

    /// Try to get the global design system (returns None if not initialized)
    pub fn try_get() -> Option<&'static DesignSystem> {
        DESIGN_SYSTEM.get()
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<DesignSnapshot> {
        self.snapshot.read().unwrap().clone()
    }

    pub fn brand(&self) -> Brand {
        self.snapshot().brand().clone()
    }

    pub fn brands(&self) -> Arc<[Brand]> {
        Arc::clone(&self.snapshot().brands)
    }

    pub fn foundations(&self) -> Arc<DesignFoundations> {
        Arc::clone(&self.snapshot().foundations)
    }

    pub fn preferences(&self) -> Preferences {
        self.snapshot().preferences
    }

    // ========== Resolution ==========

    pub fn theme_for(&self, appearance: Appearance, force_system: bool) -> Theme {
        self.snapshot().theme_for(appearance, force_system)
    }

    pub fn appearance_for(&self, appearance: Appearance, force_system: bool) -> Appearance {
        self.snapshot().appearance_for(appearance, force_system)
    }

    pub fn color(
        &self,
        role: Option<SemanticRole>,
        appearance: Appearance,
        force_system: bool,
    ) -> Color {
        self.snapshot().color(role, appearance, force_system)
    }

    pub fn color_token(
        &self,
        role: Option<SemanticRole>,
        appearance: Appearance,
        force_system: bool,
    ) -> ColorToken {
        self.snapshot().color_token(role, appearance, force_system)
    }

    pub fn resolve_semantic_token(
        &self,
        token: &SemanticColorToken,
        appearance: Appearance,
        force_system: bool,
    ) -> ColorToken {
        self.snapshot()
            .resolve_semantic_token(token, appearance, force_system)
    }

    pub fn font(&self, role: FontRole, hints: SizeClassHints) -> Font {
        self.snapshot().font(role, hints)
    }

    pub fn font_token(&self, role: FontRole) -> FontToken {
        self.snapshot().font_token(role)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.snapshot().spacing(token)
    }

    pub fn elevation(&self, level: ElevationLevel) -> ElevationToken {
        self.snapshot().elevation(level)
    }

    pub fn current_color_set(&self) -> ColorSet {
        self.snapshot().current_color_set()
    }

    // ========== Mutation ==========

    /// Follow (or stop following) the platform appearance
    pub fn set_use_system_appearance(&self, enabled: bool) {
        self.update("set_use_system_appearance", |current| {
            let mut next = current.clone();
            next.preferences.use_system_appearance = enabled;
            next
        });
    }

    /// Set the explicit theme
    ///
    /// A theme the active brand does not support falls back to the brand's
    /// default theme.
    pub fn set_theme(&self, theme: Theme) {
        self.update("set_theme", |current| {
            let mut next = current.clone();
            next.preferences.theme = theme;
            next.clamped()
        });
    }

    /// Make the brand named `name` active
    pub fn select_brand(&self, name: &str) -> Result<()> {
        self.try_update("select_brand", |current| {
            let index = current
                .brands
                .iter()
                .position(|brand| brand.name() == name)
                .ok_or_else(|| ThemeError::UnknownBrand(name.to_string()))?;
            let mut next = current.clone();
            next.brand_index = index;
            Ok(next.clamped())
        })
    }

    /// Replace the global palette
    pub fn update_foundations(&self, foundations: DesignFoundations) {
        self.update("update_foundations", |current| {
            let mut next = current.clone();
            next.foundations = Arc::new(foundations);
            next
        });
    }

    /// Select `color_set`
    pub fn apply_color_set(&self, color_set: &ColorSet) {
        self.select_color_set(color_set.name);
    }

    /// Select a color set by name
    pub fn select_color_set(&self, name: ColorSetName) {
        self.update("select_color_set", |current| {
            let mut next = current.clone();
            next.preferences.color_set = name;
            next
        });
    }

    /// Select a color set by display name, falling back to Modern Blue
    pub fn select_color_set_named(&self, name: &str) {
        let color_set = crate::color_set::color_set_named(name);
        self.apply_color_set(&color_set);
    }

    // ========== Subscriptions ==========

    /// Register a callback run with the new snapshot after every change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DesignSnapshot) + Send + Sync + 'static,
    {
        self.subscribers.lock().unwrap().insert(Arc::new(callback))
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().unwrap().remove(id).is_some()
    }

    /// Apply an infallible change and publish it
    fn update<F>(&self, operation: &str, change: F)
    where
        F: FnOnce(&DesignSnapshot) -> DesignSnapshot,
    {
        let published = {
            let _publishing = self.publishing.lock().unwrap();
            let current = self.snapshot.write().unwrap();
            let next = change(&current);
            self.commit(operation, current, next)
        };
        self.announce(published);
    }

    /// Apply a change that may be rejected, publishing it on success
    fn try_update<F>(&self, operation: &str, change: F) -> Result<()>
    where
        F: FnOnce(&DesignSnapshot) -> Result<DesignSnapshot>,
    {
        let published = {
            let _publishing = self.publishing.lock().unwrap();
            let current = self.snapshot.write().unwrap();
            let next = change(&current)?;
            self.commit(operation, current, next)
        };
        self.announce(published);
        Ok(())
    }

    /// Swap in `next` and persist the preferences it changed
    ///
    /// Callers hold `publishing` until this returns, so concurrent changes
    /// reach the store in the same order they reach the snapshot. The
    /// snapshot lock itself is released before the store is written, so the
    /// store may read the design system but must not mutate it.
    fn commit(
        &self,
        operation: &str,
        mut current: RwLockWriteGuard<'_, Arc<DesignSnapshot>>,
        next: DesignSnapshot,
    ) -> Option<Arc<DesignSnapshot>> {
        if next == **current {
            return None;
        }
        tracing::debug!(
            "DesignSystem::{} - brand '{}' -> '{}', {:?} -> {:?}",
            operation,
            current.brand().name(),
            next.brand().name(),
            current.preferences,
            next.preferences
        );

        let changed = next.preferences.changed_keys(&current.preferences);
        let next = Arc::new(next);
        *current = Arc::clone(&next);
        drop(current);

        for key in changed {
            self.store.set(key, next.preferences.value(key));
        }
        Some(next)
    }

    /// Notify subscribers and request a redraw for a published change
    fn announce(&self, published: Option<Arc<DesignSnapshot>>) {
        if let Some(snapshot) = published {
            self.notify(&snapshot);
            trigger_redraw();
        }
    }

    fn notify(&self, snapshot: &DesignSnapshot) {
        let subscribers: Vec<Subscriber> =
            self.subscribers.lock().unwrap().values().cloned().collect();
        for subscriber in subscribers {
            subscriber(snapshot);
        }
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self::with_brand(Brand::modern())
    }
}

impl std::fmt::Debug for DesignSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignSystem")
            .field("snapshot", &self.snapshot())
            .field("subscribers", &self.subscribers.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceKey;
    use crate::theme::SystemThemeMapping;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    fn dark_only_brand() -> Brand {
        Brand::new(
            "Night",
            vec![Theme::Dark],
            SystemThemeMapping::new(Theme::Dark, Theme::Dark),
            SemanticColors::modern(),
            Spacing::modern(),
            Elevation::modern(),
            FontTokens::modern(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_brand_list_rejected() {
        let result = DesignSystem::new(
            Vec::new(),
            DesignFoundations::modern(),
            MemoryPreferences::new(),
        );
        assert!(matches!(result, Err(ThemeError::NoBrands)));
    }

    #[test]
    fn test_unsupported_theme_clamped_and_persisted() {
        let store = Arc::new(MemoryPreferences::with_values([(
            PreferenceKey::ExplicitTheme,
            "light".to_string(),
        )]));
        let system = DesignSystem::new(
            vec![dark_only_brand()],
            DesignFoundations::modern(),
            Arc::clone(&store),
        )
        .unwrap();
        assert_eq!(system.preferences().theme, Theme::Dark);
        assert_eq!(store.get(PreferenceKey::ExplicitTheme).as_deref(), Some("dark"));
    }

    #[test]
    fn test_placeholder_for_missing_role() {
        let system = DesignSystem::default();
        let token = system.color_token(None, Appearance::Dark, false);
        assert_eq!(token, ColorToken::PLACEHOLDER);

        let color = system.color(None, Appearance::Light, true);
        assert_eq!(color, Color::rgba(1.0, 1.0, 1.0, 1e-7));
    }

    #[test]
    fn test_subscribers_see_new_snapshot() {
        let system = DesignSystem::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = system.subscribe(move |snapshot| {
            sink.lock().unwrap().push(snapshot.preferences().theme);
        });

        system.set_use_system_appearance(false);
        system.set_theme(Theme::Dark);
        // No change, no notification
        system.set_theme(Theme::Dark);
        assert!(system.unsubscribe(id));
        system.set_theme(Theme::Light);

        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
        assert!(!system.unsubscribe(id));
    }

    #[test]
    fn test_held_snapshot_is_unaffected_by_changes() {
        let system = DesignSystem::default();
        let before = system.snapshot();
        system.select_color_set(ColorSetName::DeepPurple);
        assert_eq!(before.current_color_set().name, ColorSetName::ModernBlue);
        assert_eq!(system.current_color_set().name, ColorSetName::DeepPurple);
    }

    #[test]
    fn test_select_brand() {
        let system = DesignSystem::new(
            vec![Brand::modern(), dark_only_brand()],
            DesignFoundations::modern(),
            MemoryPreferences::new(),
        )
        .unwrap();
        assert!(matches!(
            system.select_brand("Missing"),
            Err(ThemeError::UnknownBrand(name)) if name == "Missing"
        ));
        assert_eq!(system.brand().name(), "Modern");

        system.select_brand("Night").unwrap();
        assert_eq!(system.brand().name(), "Night");
        assert_eq!(system.preferences().theme, Theme::Dark);
        assert_eq!(system.theme_for(Appearance::Light, true), Theme::Dark);
    }

    #[test]
    fn test_update_foundations_reskins_colors() {
        let system = DesignSystem::default();
        let path = ColorRamp::Neutral.at(ColorStep::S900);
        let red = ColorToken::rgb(1.0, 0.0, 0.0);
        let palette = GlobalColors::from_named(
            GlobalColors::modern()
                .iter()
                .map(|(p, token)| (p.to_string(), if p == path { red } else { token })),
        )
        .unwrap();

        system.update_foundations(DesignFoundations::new("Red", palette));
        assert_eq!(system.foundations().name, "Red");
        let resolved = system.color_token(Some(SemanticRole::PrimaryText), Appearance::Light, true);
        assert_eq!(resolved, red);
    }

    #[test]
    fn test_redraw_callback_runs_on_change() {
        static REDRAWS: AtomicUsize = AtomicUsize::new(0);
        fn on_redraw() {
            REDRAWS.fetch_add(1, Ordering::SeqCst);
        }
        set_redraw_callback(on_redraw);

        let system = DesignSystem::default();
        let before = REDRAWS.load(Ordering::SeqCst);
        system.select_color_set_named("Charcoal");
        assert!(REDRAWS.load(Ordering::SeqCst) > before);
    }

    /// Store that starts a competing `set_theme(Light)` the first time it
    /// is asked to persist the dark theme, then stalls the write
    struct CompetingStore {
        inner: MemoryPreferences,
        system: OnceLock<Arc<DesignSystem>>,
        competitor: Mutex<Option<JoinHandle<()>>>,
    }

    impl PreferenceStore for CompetingStore {
        fn get(&self, key: PreferenceKey) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: PreferenceKey, value: String) {
            let mut competitor = self.competitor.lock().unwrap();
            if key == PreferenceKey::ExplicitTheme && value == "dark" && competitor.is_none() {
                if let Some(system) = self.system.get() {
                    let system = Arc::clone(system);
                    *competitor = Some(thread::spawn(move || system.set_theme(Theme::Light)));
                    drop(competitor);
                    thread::sleep(Duration::from_millis(50));
                }
            }
            self.inner.set(key, value);
        }
    }

    #[test]
    fn test_concurrent_changes_persist_in_order() {
        let store = Arc::new(CompetingStore {
            inner: MemoryPreferences::new(),
            system: OnceLock::new(),
            competitor: Mutex::new(None),
        });
        let system = Arc::new(
            DesignSystem::new(
                vec![Brand::modern()],
                DesignFoundations::modern(),
                Arc::clone(&store),
            )
            .unwrap(),
        );
        let _ = store.system.set(Arc::clone(&system));

        system.set_theme(Theme::Dark);
        let competitor = store.competitor.lock().unwrap().take();
        competitor.unwrap().join().unwrap();

        let live = system.preferences().theme;
        assert_eq!(live, Theme::Light);
        assert_eq!(
            store.get(PreferenceKey::ExplicitTheme).as_deref(),
            Some(live.id())
        );
    }
}
