//! SwiftUI / iOS anti-pattern rules.
//!
//! Every rule is a plain substring test against the proposed file content.
//! Rules are independent; any subset may fire, and results come back in
//! table order.

use tracing::debug;

/// Only files with this suffix are inspected.
pub const SWIFT_EXTENSION: &str = ".swift";

/// More `!` characters than this reads as force-unwrapping.
const MAX_BANG_COUNT: usize = 5;

pub struct Rule {
    pub name: &'static str,
    pub advisory: &'static str,
    matches: fn(&str) -> bool,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "observable-macro",
        advisory: "Consider using @Observable (iOS 17+) instead of ObservableObject",
        matches: uses_observable_object,
    },
    Rule {
        name: "force-unwrap",
        advisory: "Avoid force unwrapping - use guard let or if let",
        matches: force_unwraps,
    },
    Rule {
        name: "main-actor",
        advisory: "Consider @MainActor instead of DispatchQueue.main in async contexts",
        matches: dispatches_to_main_in_async,
    },
    Rule {
        name: "lazy-vstack",
        advisory: "Consider LazyVStack for better performance with ForEach",
        matches: eager_vstack_with_foreach,
    },
];

/// Whether rules apply to this path at all.
pub fn is_swift_file(file_path: &str) -> bool {
    file_path.ends_with(SWIFT_EXTENSION)
}

/// Run every rule against `content` and collect the advisories that fire.
/// Returns nothing for non-Swift paths without evaluating any rule.
pub fn evaluate(file_path: &str, content: &str) -> Vec<&'static str> {
    if !is_swift_file(file_path) {
        return Vec::new();
    }

    RULES
        .iter()
        .filter(|rule| (rule.matches)(content))
        .inspect(|rule| debug!(rule = rule.name, "rule matched"))
        .map(|rule| rule.advisory)
        .collect()
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn uses_observable_object(content: &str) -> bool {
    content.contains("ObservableObject") && !content.contains("@Observable")
}

/// "force unwrap" is matched case-insensitively; the `!` count is a crude
/// proxy for `value!` expressions.
fn force_unwraps(content: &str) -> bool {
    content.to_lowercase().contains("force unwrap")
        || content.matches('!').count() > MAX_BANG_COUNT
}

fn dispatches_to_main_in_async(content: &str) -> bool {
    content.contains("DispatchQueue.main") && content.contains("async")
}

fn eager_vstack_with_foreach(content: &str) -> bool {
    content.contains("VStack {") && content.contains("ForEach") && !content.contains("LazyVStack")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
