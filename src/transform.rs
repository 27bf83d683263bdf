/// Ordered substitution table. Matching is ASCII case-insensitive and runs
/// over the whole string, fenced code interiors included.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("hello", "yo"),
    ("friend", "fam"),
    ("seriously", "fr fr"),
    ("amazing", "lit"),
];

/// Applies the meme-speak pass to a bot reply: fenced code regions are
/// re-wrapped on their own lines, then the substitution table runs once.
/// Pure and deterministic; called once per received reply.
pub fn meme_speak(text: &str) -> String {
    let mut out = rewrap_code_fences(text);
    for (pattern, replacement) in REPLACEMENTS {
        out = replace_ignore_ascii_case(&out, pattern, replacement);
    }
    out
}

/// Re-emits every ```-fenced region framed by newlines, keeping the interior
/// verbatim. An unterminated opening fence is left untouched.
fn rewrap_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let Some(close) = rest[open + 3..].find("```") else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("\n```\n");
        out.push_str(&rest[open + 3..open + 3 + close]);
        out.push_str("\n```\n");
        rest = &rest[open + 3 + close + 3..];
    }
    out.push_str(rest);
    out
}

fn replace_ignore_ascii_case(text: &str, pattern: &str, replacement: &str) -> String {
    // Lowercasing ASCII keeps byte offsets stable, so positions found in the
    // haystack index directly into the original text.
    debug_assert!(pattern.is_ascii());
    let haystack = text.to_ascii_lowercase();
    let needle = pattern.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(&needle) {
        let at = start + pos;
        out.push_str(&text[start..at]);
        out.push_str(replacement);
        start = at + needle.len();
    }
    out.push_str(&text[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutions_apply_in_order() {
        assert_eq!(
            meme_speak("hello friend, seriously amazing"),
            "yo fam, fr fr lit"
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(meme_speak("HELLO Friend"), "yo fam");
        assert_eq!(meme_speak("SeRiOuSlY"), "fr fr");
    }

    #[test]
    fn code_fence_round_trips_framed_by_newlines() {
        assert_eq!(meme_speak("```x=1```"), "\n```\nx=1\n```\n");
    }

    #[test]
    fn substitutions_reach_inside_code_fences() {
        // The interior is deliberately not exempted.
        assert_eq!(
            meme_speak("```print(\"hello\")```"),
            "\n```\nprint(\"yo\")\n```\n"
        );
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        assert_eq!(meme_speak("```x=1"), "```x=1");
    }

    #[test]
    fn multiple_fences_each_get_rewrapped() {
        assert_eq!(
            meme_speak("a```one```b```two```c"),
            "a\n```\none\n```\nb\n```\ntwo\n```\nc"
        );
    }

    #[test]
    fn untouched_text_passes_through() {
        assert_eq!(meme_speak("nothing to see here"), "nothing to see here");
    }
}
