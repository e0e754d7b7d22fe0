//! Sentinel-phrase suppression for the town label of KEN_ALL rows
//!
//! The dataset uses a few fixed phrases in the town column as placeholders
//! rather than place names. They are cleared to an empty string. Rules run
//! top to bottom and the first match decides.

/// What a rule matches against the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
}

impl LabelMatch {
    fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatch::Exact(phrase) => label == *phrase,
            LabelMatch::Prefix(phrase) => label.starts_with(*phrase),
            LabelMatch::Suffix(phrase) => label.ends_with(*phrase),
        }
    }
}

/// What happens to a label once a rule matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAction {
    Keep,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule {
    pub matcher: LabelMatch,
    pub action: LabelAction,
}

/// "Whole area"; a real place name when it leads, a catch-all when it trails
pub const WHOLE_AREA: &str = "一円";

/// "No listing below this level"
pub const NOT_LISTED: &str = "以下に掲載がない場合";

/// "Lot number follows the town name" (Sakai-machi)
pub const LOT_FOLLOWS_TOWN: &str = "境町の次に番地がくる場合";

pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        matcher: LabelMatch::Prefix(WHOLE_AREA),
        action: LabelAction::Keep,
    },
    LabelRule {
        matcher: LabelMatch::Exact(NOT_LISTED),
        action: LabelAction::Clear,
    },
    LabelRule {
        matcher: LabelMatch::Exact(LOT_FOLLOWS_TOWN),
        action: LabelAction::Clear,
    },
    LabelRule {
        matcher: LabelMatch::Suffix(WHOLE_AREA),
        action: LabelAction::Clear,
    },
];

/// Apply `rules` in order; a label no rule matches is kept
pub fn apply_rules(rules: &[LabelRule], label: String) -> String {
    let action = rules
        .iter()
        .find(|rule| rule.matcher.matches(&label))
        .map(|rule| rule.action)
        .unwrap_or(LabelAction::Keep);

    match action {
        LabelAction::Keep => label,
        LabelAction::Clear => String::new(),
    }
}

/// Suppress sentinel phrases in a town label
pub fn suppress_sentinels(label: String) -> String {
    apply_rules(LABEL_RULES, label)
}
