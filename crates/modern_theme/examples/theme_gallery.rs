//! Theme Gallery
//!
//! Prints the resolved semantic colors of the Modern brand in both themes,
//! then walks the color-set gallery while a subscriber reports each change.
//!
//! Run with: cargo run -p modern_theme --example theme_gallery

use modern_theme::{
    available_color_sets, set_redraw_callback, Appearance, DesignSystem, FontRole, Result,
    SemanticRole, SizeClass, SizeClassHints, Theme,
};

fn redraw() {
    tracing::info!("redraw requested");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    DesignSystem::init_default();
    set_redraw_callback(redraw);
    let system = DesignSystem::get();

    for appearance in [Appearance::Light, Appearance::Dark] {
        println!("== {:?} ==", appearance);
        for &role in SemanticRole::all() {
            let color = system.color(Some(role), appearance, true);
            println!("{:>22}  {}", format!("{:?}", role), color.to_css());
        }
    }

    let compact = SizeClassHints::new(Some(SizeClass::Compact), None);
    for &role in [FontRole::DisplayLarge, FontRole::BodyLarge, FontRole::CaptionSmall].iter() {
        let regular = system.font(role, SizeClassHints::default());
        let scaled = system.font(role, compact);
        println!(
            "{:>14}  {:>5.1}pt -> {:>5.1}pt compact",
            format!("{:?}", role),
            regular.size,
            scaled.size
        );
    }

    let id = system.subscribe(|snapshot| {
        let set = snapshot.current_color_set();
        println!("color set: {} (tint {})", set.name, set.tint.color().to_css());
    });
    for set in available_color_sets() {
        system.apply_color_set(&set);
    }
    system.unsubscribe(id);

    system.set_use_system_appearance(false);
    system.set_theme(Theme::Dark);
    println!(
        "explicit dark theme, platform light: {:?}",
        system.theme_for(Appearance::Light, false)
    );

    system.select_brand("Modern")?;
    Ok(())
}
