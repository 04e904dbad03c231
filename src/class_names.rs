//! Class Name Merging
//!
//! Joins utility class strings so that later classes replace earlier ones
//! from the same utility group (`p-6` then `p-4` keeps `p-4`). Classes we
//! cannot classify are kept as written; exact duplicates collapse.

use std::collections::HashSet;

/// Prefix groups, longest first so `px` is matched before `p`
const PREFIX_GROUPS: &[&str] = &[
    "min-w", "max-w", "min-h", "max-h", "gap-x", "gap-y", "space-x", "space-y",
    "grid-cols", "grid-rows", "col-span", "row-span", "translate-x", "translate-y",
    "px", "py", "pt", "pr", "pb", "pl", "mx", "my", "mt", "mr", "mb", "ml",
    "p", "m", "w", "h", "gap", "items", "justify", "content", "self",
    "cursor", "list", "opacity", "z", "overflow", "leading", "tracking",
    "duration", "ease", "delay", "bg", "top", "bottom", "left", "right", "inset",
    "scale", "rotate", "order", "basis", "grow", "shrink", "transition",
];

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden", "contents",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const ROUNDED_SIDES: &[&str] = &["t", "r", "b", "l", "tl", "tr", "br", "bl", "s", "e"];

/// Merge class strings, later classes win on conflicts
pub fn cn(parts: &[&str]) -> String {
    let classes: Vec<&str> = parts.iter().flat_map(|part| part.split_whitespace()).collect();

    let mut taken_groups: HashSet<String> = HashSet::new();
    let mut taken_classes: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        if !taken_classes.insert(class) {
            continue;
        }
        let (variants, base) = split_variants(class);
        match class_group(base) {
            Some(group) => {
                let key = format!("{}{}", variants, group);
                if taken_groups.contains(&key) {
                    continue;
                }
                for overridden in conflicting_groups(group) {
                    taken_groups.insert(format!("{}{}", variants, overridden));
                }
                taken_groups.insert(key);
                kept.push(class);
            }
            None => kept.push(class),
        }
    }

    kept.reverse();
    kept.join(" ")
}

/// Split `hover:md:px-4` into (`hover:md:`, `px-4`)
fn split_variants(class: &str) -> (&str, &str) {
    match class.rfind(':') {
        Some(idx) => class.split_at(idx + 1),
        None => ("", class),
    }
}

/// Utility group of a class without variants, `None` when unknown
fn class_group(class: &str) -> Option<&'static str> {
    let class = class.strip_prefix('!').unwrap_or(class);
    let class = class.strip_prefix('-').unwrap_or(class);

    if DISPLAY.contains(&class) {
        return Some("display");
    }
    if POSITION.contains(&class) {
        return Some("position");
    }
    if let Some(rest) = class.strip_prefix("flex-") {
        return Some(match rest {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    if let Some(rest) = class.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = class.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) { "font-weight" } else { "font-family" });
    }
    if class == "border" {
        return Some("border-width");
    }
    if let Some(rest) = class.strip_prefix("border-") {
        let is_width = rest.chars().all(|c| c.is_ascii_digit()) || (rest.starts_with('[') && rest.ends_with("px]"));
        return Some(if is_width { "border-width" } else { "border-color" });
    }
    if class == "shadow" || class.starts_with("shadow-") {
        return Some("shadow");
    }
    if class == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = class.strip_prefix("rounded-") {
        let side = rest.split('-').next().unwrap_or("");
        return Some(if ROUNDED_SIDES.contains(&side) { "rounded-side" } else { "rounded" });
    }

    PREFIX_GROUPS.iter().copied().find(|prefix| {
        class == *prefix
            || class
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('-'))
    })
}

/// Groups an utility of `group` overrides when it comes later
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["top", "right", "bottom", "left"],
        "rounded" => &["rounded-side"],
        _ => &[],
    }
}
