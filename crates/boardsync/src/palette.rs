//! Agent color lookup. Colors are opaque display tokens to the rest of the crate.

pub const DEFAULT_COLOR: &str = "#888888";

const PALETTE: &[(&str, &str)] = &[("Dolsoe", "#4040ff"), ("GPT-4o", "#00ffff")];

pub fn color_for(agent: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|(name, _)| *name == agent)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
