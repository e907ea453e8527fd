//! Built-in icon and color metadata for fighting styles.

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Display attributes attached to a style record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetadata {
    pub name: &'static str,
    pub sf_symbol: &'static str,
    pub color: StyleColor,
}

const fn style(name: &'static str, sf_symbol: &'static str, rgb: (f64, f64, f64)) -> StyleMetadata {
    StyleMetadata { name, sf_symbol, color: StyleColor { red: rgb.0, green: rgb.1, blue: rgb.2 } }
}

/// Lookup table keyed by style name.
pub const STYLE_METADATA: &[StyleMetadata] = &[
    style("Blood Magic", "heart.fill", (0.8, 0.0, 0.0)),
    style("Earth Magic", "mountain.2.fill", (0.5, 0.3, 0.0)),
    style("Fire Magic", "flame.fill", (0.9, 0.3, 0.1)),
    style("Frost Magic", "snow", (0.7, 0.9, 1.0)),
    style("Lightning Magic", "bolt.fill", (1.0, 0.8, 0.0)),
    style("Shadow Magic", "moon.stars.fill", (0.3, 0.0, 0.5)),
    style("Water Magic", "drop.fill", (0.0, 0.5, 0.8)),
    style("Longsword", "bolt.horizontal.fill", (0.0, 0.0, 0.8)),
    style("Battle Axe", "hammer.fill", (0.6, 0.4, 0.2)),
    style("Bow", "arrow.up.and.down.and.arrow.left.and.right", (0.2, 0.5, 0.3)),
    style("Rapier & Dagger", "checkmark.seal.fill", (0.5, 0.0, 0.5)),
    style("Spear", "arrow.up.to.line.compact", (0.7, 0.7, 0.2)),
    style("Thrown Weapons", "arrowtriangle.forward.fill", (0.6, 0.3, 0.1)),
];

/// Find metadata for an exact style name.
pub fn lookup(name: &str) -> Option<&'static StyleMetadata> {
    STYLE_METADATA.iter().find(|meta| meta.name == name)
}
