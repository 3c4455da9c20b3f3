//! Utilities for composing BEM class lists

/// Appends an optional caller class to a fixed base class.
///
/// The caller class never replaces the base one; empty or whitespace-only
/// extras are ignored.
pub fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// Adds `modifier` to `base` when `enabled`
pub fn with_modifier(base: &str, modifier: &str, enabled: bool) -> String {
    if enabled {
        format!("{base} {modifier}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_class_appends_after_base() {
        assert_eq!(merge_class("table__cell", Some("text-right")), "table__cell text-right");
        assert_eq!(
            merge_class("table__row", Some("table__row--selected extra")),
            "table__row table__row--selected extra"
        );
    }

    #[test]
    fn test_merge_class_without_extra() {
        assert_eq!(merge_class("table", None), "table");
        assert_eq!(merge_class("table", Some("")), "table");
        assert_eq!(merge_class("table", Some("   ")), "table");
    }

    #[test]
    fn test_with_modifier() {
        assert_eq!(with_modifier("tabs__tab", "tabs__tab--active", true), "tabs__tab tabs__tab--active");
        assert_eq!(with_modifier("tabs__tab", "tabs__tab--active", false), "tabs__tab");
    }
}
