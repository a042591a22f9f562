//! Conflict-aware joining of utility class lists
//!
//! Class fragments are concatenated in order, then any class that is
//! overridden by a later class setting the same property (under the same
//! modifiers) is removed. `merge_classes(["px-2 text-base", "text-sm"])`
//! yields `"px-2 text-sm"`.
//!
//! Classes the merger does not recognize are never removed.

use std::collections::HashSet;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const DECORATION_STYLES: &[&str] = &["solid", "double", "dotted", "dashed", "wavy"];
const SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const ROUNDED_SIDES: &[&str] = &[
    "t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl", "ss", "se", "es", "ee",
];
const SPACING: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "m", "mx", "my", "mt", "mr", "mb", "ml",
    "ms", "me",
];
const SIZING: &[&str] = &["w", "h", "size", "min-w", "min-h", "max-w", "max-h"];
const INSET: &[&str] = &[
    "inset-x", "inset-y", "inset", "top", "right", "bottom", "left", "start", "end",
];

const KEYWORDS: &[(&str, &str)] = &[
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("truncate", "text-overflow"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("block", "display"),
    ("inline", "display"),
    ("inline-block", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("hidden", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("list-item", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("antialiased", "font-smoothing"),
    ("subpixel-antialiased", "font-smoothing"),
    ("border", "border-w"),
    ("rounded", "rounded"),
    ("transition", "transition"),
    ("drop-shadow", "drop-shadow"),
    ("shadow", "shadow"),
];

/// Groups a class removes from earlier positions besides its own
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "font-size" => &["leading"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
            "border-w-s", "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-t", "border-color-r",
            "border-color-b", "border-color-l", "border-color-s", "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "border-spacing" => &["border-spacing-x", "border-spacing-y"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "rounded-ss", "rounded-se",
            "rounded-es", "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        _ => &[],
    }
}

/// Join class fragments, dropping classes overridden by later ones
///
/// Later fragments win: a caller's classes passed last replace conflicting
/// classes from earlier fragments.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let classes: Vec<&str> = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());

    for class in classes.iter().rev() {
        match conflict_key(class) {
            Some(key) => {
                let group_key = key.with_group(&key.group);
                if seen.contains(&group_key) {
                    continue;
                }
                for other in conflicting_groups(&key.group) {
                    seen.insert(key.with_group(other));
                }
                seen.insert(group_key);
                kept.push(*class);
            }
            None => kept.push(*class),
        }
    }

    kept.reverse();
    kept.join(" ")
}

/// The part of a class that decides what it conflicts with
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConflictKey {
    modifiers: String,
    important: bool,
    group: String,
}

impl ConflictKey {
    fn with_group(&self, group: &str) -> String {
        format!(
            "{}{}{}",
            self.modifiers,
            if self.important { "!" } else { "" },
            group
        )
    }
}

fn conflict_key(class: &str) -> Option<ConflictKey> {
    let (modifiers, base) = split_modifiers(class);

    let (important, base) = if let Some(rest) = base.strip_prefix('!') {
        (true, rest)
    } else if let Some(rest) = base.strip_suffix('!') {
        (true, rest)
    } else {
        (false, base)
    };
    let base = strip_opacity(base.strip_prefix('-').unwrap_or(base));

    let group = class_group(base)?;
    let modifiers = sort_modifiers(modifiers);
    Some(ConflictKey {
        modifiers: modifiers.join(":") + if modifiers.is_empty() { "" } else { ":" },
        important,
        group,
    })
}

/// Split `hover:[&_em]:font-bold` into `["hover", "[&_em]"]` and `font-bold`
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (modifiers, &class[start..])
}

/// Sort runs of plain modifiers so `hover:focus:` and `focus:hover:` match
///
/// Arbitrary modifiers such as `[&_em]` depend on their position and stay put.
fn sort_modifiers(modifiers: Vec<&str>) -> Vec<&str> {
    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run = Vec::new();

    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);
    sorted
}

/// Drop an opacity postfix such as the `/90` in `bg-primary/90`
fn strip_opacity(base: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in base.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => return &base[..i],
            _ => {}
        }
    }
    base
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']') && value.len() >= 2
}

/// Numeric scale values (`4`, `1.5`, `px`) and arbitrary lengths (`[6px]`)
fn is_length(value: &str) -> bool {
    if is_arbitrary(value) {
        let inner = &value[1..value.len() - 1];
        return inner.starts_with("length:")
            || inner
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit() || c == '.');
    }
    value == "px" || value.parse::<f64>().is_ok()
}

fn class_group(base: &str) -> Option<String> {
    // Arbitrary properties: [word-spacing:-0.2em]
    if is_arbitrary(base) {
        let inner = &base[1..base.len() - 1];
        let (property, _) = inner.split_once(':')?;
        return Some(format!("[{}]", property));
    }

    if let Some((_, group)) = KEYWORDS.iter().find(|(keyword, _)| *keyword == base) {
        return Some(group.to_string());
    }

    if let Some(value) = base.strip_prefix("text-") {
        let group = if FONT_SIZES.contains(&value) || is_length(value) {
            "font-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else if TEXT_WRAP.contains(&value) {
            "text-wrap"
        } else if TEXT_OVERFLOW.contains(&value) {
            "text-overflow"
        } else {
            "text-color"
        };
        return Some(group.to_string());
    }

    if let Some(value) = base.strip_prefix("font-") {
        // Anything that is not a weight names a family: font-sans, font-[Inter]
        let group = if FONT_WEIGHTS.contains(&value) || is_length(value) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some(group.to_string());
    }

    if let Some(value) = base.strip_prefix("border-") {
        return Some(border_group(value));
    }

    if let Some(value) = base.strip_prefix("bg-") {
        return Some(bg_group(value).to_string());
    }

    if let Some(value) = base.strip_prefix("rounded-") {
        let group = match value.split_once('-') {
            Some((side, _)) if ROUNDED_SIDES.contains(&side) => format!("rounded-{}", side),
            _ if ROUNDED_SIDES.contains(&value) => format!("rounded-{}", value),
            _ => "rounded".to_string(),
        };
        return Some(group);
    }

    if let Some(value) = base.strip_prefix("decoration-") {
        let group = if DECORATION_STYLES.contains(&value) {
            "decoration-style"
        } else if value == "auto" || value == "from-font" || is_length(value) {
            "decoration-thickness"
        } else {
            "decoration-color"
        };
        return Some(group.to_string());
    }

    if let Some(value) = base.strip_prefix("scroll-") {
        let (head, _) = value.split_once('-')?;
        return SPACING
            .contains(&head)
            .then(|| format!("scroll-{}", head));
    }

    if let Some(value) = base.strip_prefix("content-") {
        let group = if is_arbitrary(value) || value == "none" {
            "content"
        } else {
            "align-content"
        };
        return Some(group.to_string());
    }

    const SIMPLE: &[(&str, &str)] = &[
        ("underline-offset-", "underline-offset"),
        ("tracking-", "tracking"),
        ("leading-", "leading"),
        ("whitespace-", "whitespace"),
        ("transition-", "transition"),
        ("duration-", "duration"),
        ("ease-", "ease"),
        ("delay-", "delay"),
        ("align-", "vertical-align"),
        ("drop-shadow-", "drop-shadow"),
        ("shadow-", "shadow"),
        ("opacity-", "opacity"),
        ("z-", "z-index"),
        ("gap-", "gap"),
        ("items-", "align-items"),
        ("justify-", "justify-content"),
    ];
    if let Some((_, group)) = SIMPLE.iter().find(|(prefix, _)| base.starts_with(prefix)) {
        return Some(group.to_string());
    }

    // Longest prefix first so `inset-x-2` is not read as `inset`
    let mut sized: Vec<&str> = SPACING
        .iter()
        .chain(SIZING)
        .chain(INSET)
        .copied()
        .collect();
    sized.sort_by_key(|prefix| std::cmp::Reverse(prefix.len()));
    sized
        .into_iter()
        .find(|prefix| {
            base.strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
        })
        .map(str::to_string)
}

/// `bg-primary/10`, `bg-cover`, `bg-center`, `bg-no-repeat`, `bg-[url(..)]`
fn bg_group(value: &str) -> &'static str {
    if BG_SIZES.contains(&value) {
        return "bg-size";
    }
    if BG_POSITIONS.contains(&value) {
        return "bg-position";
    }
    if BG_ATTACHMENTS.contains(&value) {
        return "bg-attachment";
    }
    if value == "no-repeat" || value.starts_with("repeat") {
        return "bg-repeat";
    }
    if value == "none"
        || ["gradient-", "linear-", "radial", "conic"]
            .iter()
            .any(|prefix| value.starts_with(prefix))
    {
        return "bg-image";
    }
    if value.starts_with("clip-") {
        return "bg-clip";
    }
    if value.starts_with("origin-") {
        return "bg-origin";
    }
    if value.starts_with("blend-") {
        return "bg-blend";
    }

    if is_arbitrary(value) {
        let inner = &value[1..value.len() - 1];
        if inner.starts_with("url(") || inner.starts_with("image:") {
            return "bg-image";
        }
        if inner.starts_with("length:") || inner.starts_with("size:") {
            return "bg-size";
        }
        if inner.starts_with("position:") {
            return "bg-position";
        }
    }
    "bg-color"
}

/// `border-2`, `border-l-[6px]`, `border-primary`, `border-dashed`
fn border_group(value: &str) -> String {
    if let Some(rest) = value.strip_prefix("spacing-") {
        return match rest.split_once('-') {
            Some((axis @ ("x" | "y"), _)) => format!("border-spacing-{}", axis),
            _ => "border-spacing".to_string(),
        };
    }

    for side in SIDES {
        if value == *side {
            return format!("border-w-{}", side);
        }
        if let Some(rest) = value
            .strip_prefix(side)
            .and_then(|rest| rest.strip_prefix('-'))
        {
            return if is_length(rest) {
                format!("border-w-{}", side)
            } else {
                format!("border-color-{}", side)
            };
        }
    }

    if BORDER_STYLES.contains(&value) {
        "border-style".to_string()
    } else if is_length(value) {
        "border-w".to_string()
    } else if value == "collapse" || value == "separate" {
        "border-collapse".to_string()
    } else {
        "border-color".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_font_size_wins() {
        assert_eq!(merge_classes(["text-5xl", "text-3xl"]), "text-3xl");
        assert_eq!(
            merge_classes(["-tracking-wide text-base", "text-sm font-medium"]),
            "-tracking-wide text-sm font-medium"
        );
    }

    #[test]
    fn test_size_and_color_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-[0.9em]", "text-primary/90"]),
            "text-[0.9em] text-primary/90"
        );
    }

    #[test]
    fn test_modifiers_separate_groups() {
        assert_eq!(
            merge_classes(["font-bold [&_strong]:font-bold", "font-normal"]),
            "[&_strong]:font-bold font-normal"
        );
        assert_eq!(
            merge_classes(["hover:text-primary", "text-foreground"]),
            "hover:text-primary text-foreground"
        );
    }

    #[test]
    fn test_weight_and_family_are_distinct() {
        assert_eq!(merge_classes(["font-mono", "font-medium"]), "font-mono font-medium");
        assert_eq!(merge_classes(["font-sans", "font-serif"]), "font-serif");
    }

    #[test]
    fn test_border_width_and_color() {
        assert_eq!(
            merge_classes(["border-border border-l-[6px] pl-4", "border-primary/90"]),
            "border-l-[6px] pl-4 border-primary/90"
        );
        assert_eq!(merge_classes(["border-2", "border"]), "border");
        assert_eq!(merge_classes(["border-l-4", "border-2"]), "border-2");
    }

    #[test]
    fn test_axis_padding_overrides_side_padding() {
        assert_eq!(merge_classes(["pl-4 pr-2", "px-1"]), "px-1");
        assert_eq!(merge_classes(["px-1", "pl-4"]), "px-1 pl-4");
    }

    #[test]
    fn test_font_size_overrides_line_height() {
        assert_eq!(merge_classes(["leading-none", "text-lg"]), "text-lg");
        assert_eq!(
            merge_classes(["text-sm leading-none"]),
            "text-sm leading-none"
        );
    }

    #[test]
    fn test_negative_values_conflict_with_positive() {
        assert_eq!(merge_classes(["-tracking-wide", "tracking-tight"]), "tracking-tight");
    }

    #[test]
    fn test_arbitrary_properties_grouped_by_name() {
        assert_eq!(
            merge_classes(["[word-spacing:-0.2em] [tab-size:4]", "[word-spacing:0]"]),
            "[tab-size:4] [word-spacing:0]"
        );
    }

    #[test]
    fn test_unknown_classes_survive() {
        assert_eq!(
            merge_classes(["flow nont-italic", "flow"]),
            "flow nont-italic flow"
        );
    }

    #[test]
    fn test_whitespace_and_empty_parts() {
        assert_eq!(merge_classes(["  a   b ", "", "c"]), "a b c");
        assert_eq!(merge_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_decoration_groups() {
        assert_eq!(
            merge_classes(["decoration-transparent underline-offset-4", "decoration-foreground"]),
            "underline-offset-4 decoration-foreground"
        );
        assert_eq!(
            merge_classes(["decoration-wavy", "decoration-2 decoration-primary"]),
            "decoration-wavy decoration-2 decoration-primary"
        );
    }

    #[test]
    fn test_important_is_its_own_key() {
        assert_eq!(merge_classes(["!text-sm", "text-lg"]), "!text-sm text-lg");
    }

    #[test]
    fn test_split_modifiers_respects_brackets() {
        assert_eq!(
            split_modifiers("before:content-['a:b']"),
            (vec!["before"], "content-['a:b']")
        );
        assert_eq!(
            split_modifiers("[&_em]:hover:italic"),
            (vec!["[&_em]", "hover"], "italic")
        );
    }

    #[test]
    fn test_background_groups() {
        assert_eq!(
            merge_classes(["bg-primary/10", "bg-no-repeat bg-cover bg-center bg-fixed"]),
            "bg-primary/10 bg-no-repeat bg-cover bg-center bg-fixed"
        );
        assert_eq!(
            merge_classes(["bg-primary/10 bg-[url(/grain.png)]", "bg-none bg-muted"]),
            "bg-none bg-muted"
        );
        assert_eq!(merge_classes(["bg-contain", "bg-[length:50%]"]), "bg-[length:50%]");
        assert_eq!(merge_classes(["bg-repeat-x", "bg-no-repeat"]), "bg-no-repeat");
    }

    #[test]
    fn test_text_overflow_is_not_color() {
        assert_eq!(
            merge_classes(["text-primary", "text-ellipsis"]),
            "text-primary text-ellipsis"
        );
        assert_eq!(merge_classes(["text-clip", "truncate"]), "truncate");
    }

    #[test]
    fn test_corner_radius_groups() {
        assert_eq!(
            merge_classes(["rounded-lg", "rounded-tl-none"]),
            "rounded-lg rounded-tl-none"
        );
        assert_eq!(merge_classes(["rounded-tl-none rounded-br-md", "rounded-lg"]), "rounded-lg");
        assert_eq!(
            merge_classes(["rounded-tl-none rounded-bl-sm", "rounded-t-md"]),
            "rounded-bl-sm rounded-t-md"
        );
        assert_eq!(merge_classes(["rounded-ss-lg", "rounded-s"]), "rounded-s");
    }

    #[test]
    fn test_border_spacing_is_not_color() {
        assert_eq!(
            merge_classes(["border-border", "border-spacing-2"]),
            "border-border border-spacing-2"
        );
        assert_eq!(
            merge_classes(["border-spacing-x-1 border-spacing-y-2", "border-spacing-4"]),
            "border-spacing-4"
        );
    }

    #[test]
    fn test_modifier_order_is_ignored() {
        assert_eq!(
            merge_classes(["hover:focus:text-primary", "focus:hover:text-foreground"]),
            "focus:hover:text-foreground"
        );
        assert_eq!(
            merge_classes(["[&_em]:hover:font-bold", "hover:[&_em]:font-normal"]),
            "[&_em]:hover:font-bold hover:[&_em]:font-normal"
        );
    }

    #[test]
    fn test_sizing_prefixes() {
        assert_eq!(merge_classes(["w-fit max-w-4xl", "w-full"]), "max-w-4xl w-full");
        assert_eq!(merge_classes(["min-h-screen", "min-h-dvh"]), "min-h-dvh");
        assert_eq!(merge_classes(["inset-x-2", "left-0"]), "inset-x-2 left-0");
    }
}
