//! Prefix grammar that switches the quick search field into a sub-mode.

use crate::intl::MessageId;
use crate::types::QuickSearchMode;

/// An exact field value that switches the palette into `mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePrefix {
    pub prefix: &'static str,
    pub mode: QuickSearchMode,
    /// Label of the default-mode hint that advertises this prefix
    pub hint: MessageId,
}

pub const MODE_PREFIXES: &[ModePrefix] = &[
    ModePrefix {
        prefix: "> ",
        mode: QuickSearchMode::Commands,
        hint: MessageId::CommandsModeHint,
    },
    ModePrefix {
        prefix: "# ",
        mode: QuickSearchMode::Orders,
        hint: MessageId::OrdersModeHint,
    },
];

/// Mode selected by `value`, if the whole value is a registered prefix.
///
/// Partial input (`">"`, `"#"`) and prefixes followed by more text do not match.
pub fn match_mode_prefix(value: &str) -> Option<QuickSearchMode> {
    MODE_PREFIXES
        .iter()
        .find(|p| p.prefix == value)
        .map(|p| p.mode)
}
