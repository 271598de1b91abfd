//! The fixed label taxonomy provisioned before any issue is created.

// ---------------------------------------------------------------------------
// Label specification
// ---------------------------------------------------------------------------

/// A label the target repository must have: name plus the color and
/// description sent on create-or-update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: &'static str,

    /// Six-digit hex color, without a `#` prefix.
    pub color: &'static str,

    pub description: &'static str,
}

const fn label(
    name: &'static str,
    color: &'static str,
    description: &'static str,
) -> LabelSpec {
    LabelSpec {
        name,
        color,
        description,
    }
}

/// Every label the pipeline may attach to an issue, in provisioning order:
/// three kinds, three areas, three complexities.
pub const LABEL_TAXONOMY: &[LabelSpec] = &[
    label("feature", "0e8a16", "New feature or request"),
    label("bug", "d73a4a", "Something is not working"),
    label(
        "documentation",
        "0075ca",
        "Improvements or additions to documentation",
    ),
    label("database", "fbca04", "Database related tasks"),
    label("backend", "c5def5", "Backend related tasks"),
    label("frontend", "bfdadc", "Frontend related tasks"),
    label("low", "cccccc", "Low complexity"),
    label("medium", "fbca04", "Medium complexity"),
    label("high", "ff9800", "High complexity"),
];
