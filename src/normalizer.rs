use crate::label::ColumnLabel;
use tracing::debug;

/// Lowercases `name` and collapses every maximal run of ASCII whitespace
/// and/or hyphens into a single underscore.
///
/// Nothing is trimmed: a leading or trailing separator run becomes a leading
/// or trailing underscore. Non-ASCII whitespace and dash characters (NBSP,
/// en dash, ...) are not treated as separators and pass through lowercased
/// but otherwise unchanged.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.chars() {
        if ch == '-' || ch.is_ascii_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            normalized.push('_');
            pending_separator = false;
        }
        normalized.push(ch);
    }
    if pending_separator {
        normalized.push('_');
    }

    normalized
}

/// Applies [`normalize_name`] to a label while keeping its shape: a scalar
/// stays a scalar, a composite keeps its arity and part order.
pub fn normalize_label(label: &ColumnLabel) -> ColumnLabel {
    match label {
        ColumnLabel::Scalar(name) => ColumnLabel::Scalar(normalize_name(name)),
        ColumnLabel::Composite(parts) => {
            ColumnLabel::Composite(parts.iter().map(|part| normalize_name(part)).collect())
        }
    }
}

/// Normalizes a whole header row, preserving order. Each label the pass
/// actually renamed is reported at debug level so pipelines can audit the
/// mapping.
pub fn normalize_headers<I>(labels: I) -> Vec<ColumnLabel>
where
    I: IntoIterator<Item = ColumnLabel>,
{
    labels
        .into_iter()
        .map(|label| {
            let normalized = label.normalize();
            if normalized != label {
                debug!(from = %label, to = %normalized, "normalized column label");
            }
            normalized
        })
        .collect()
}
