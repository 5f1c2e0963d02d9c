//! Cleanup of raw model output before it reaches the caller.

const TRANSLATION_LABEL: &str = "translation:";

/// Strips quoting and label artifacts the model sometimes adds despite the
/// prompt rules: surrounding `"`/`'` quotes and a leading `Translation:`
/// label (any case). Runs to a fixpoint so stripping a label that exposes
/// another quote layer still converges; `clean(clean(x)) == clean(x)`.
pub fn clean(raw: &str) -> String {
    let mut text = raw.trim();
    loop {
        let pass = clean_once(text);
        if pass == text {
            return text.to_string();
        }
        text = pass;
    }
}

fn clean_once(text: &str) -> &str {
    let stripped = text.trim().trim_matches(|c| c == '"' || c == '\'');
    // get() avoids slicing mid-character when the reply starts with a
    // multi-byte script.
    match stripped.get(..TRANSLATION_LABEL.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(TRANSLATION_LABEL) => {
            stripped[TRANSLATION_LABEL.len()..].trim_start()
        }
        _ => stripped.trim(),
    }
}
