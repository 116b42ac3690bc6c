//! # Ranking Module
//!
//! Orders candidate icon lists by collection preference: learned usage
//! first, then a style-dependent static default order. The sort is stable,
//! so icons from unranked collections keep their original relative order.

use std::cmp::Ordering;

use crate::icon::collection_prefix;

/// The visual style a caller is filtering or ranking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    Solid,
    Outline,
    #[default]
    Any,
}

impl Style {
    /// Lenient parse; anything unrecognized is treated as [`Style::Any`]
    /// since style is a soft ranking hint, not a validated input.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Style::Solid,
            "outline" => Style::Outline,
            _ => Style::Any,
        }
    }

    /// Static default collection order for this style.
    fn default_collections(self) -> &'static [&'static str] {
        match self {
            Style::Solid => &["mdi", "material-symbols", "heroicons-solid", "ph", "bi"],
            Style::Outline => &["lucide", "tabler", "heroicons-outline", "iconoir", "mingcute"],
            Style::Any => &["lucide", "mdi", "tabler", "material-symbols", "ph"],
        }
    }
}

/// Stably reorder `icons` by collection rank in the combined preference
/// order: learned preferences first, then the style's static defaults,
/// deduplicated preserving first occurrence. Ranked icons sort before
/// unranked ones; two unranked icons keep their original relative order.
pub fn sort_by_preferred_collections(icons: &mut [String], style: Style, learned: &[String]) {
    let order = combined_order(learned, style.default_collections());
    sort_by_collection_order(icons, &order);
}

/// Like [`sort_by_preferred_collections`] but using learned preferences
/// only. An empty learned list leaves the input unchanged.
pub fn sort_by_learned_preferences(icons: &mut [String], learned: &[String]) {
    if learned.is_empty() {
        return;
    }
    let order: Vec<&str> = learned.iter().map(String::as_str).collect();
    sort_by_collection_order(icons, &order);
}

fn combined_order<'a>(learned: &'a [String], defaults: &'a [&'a str]) -> Vec<&'a str> {
    let mut order: Vec<&str> = Vec::with_capacity(learned.len() + defaults.len());
    for prefix in learned
        .iter()
        .map(String::as_str)
        .chain(defaults.iter().copied())
    {
        if !order.contains(&prefix) {
            order.push(prefix);
        }
    }
    order
}

fn sort_by_collection_order(icons: &mut [String], order: &[&str]) {
    icons.sort_by(|a, b| match (rank_of(a, order), rank_of(b, order)) {
        (Some(rank_a), Some(rank_b)) => rank_a.cmp(&rank_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn rank_of(icon: &str, order: &[&str]) -> Option<usize> {
    let prefix = collection_prefix(icon)?;
    order.iter().position(|candidate| *candidate == prefix)
}
