// Fragment helpers for LaTeX conversion
//
// Child conversions are produced independently and then spliced together.
// A control word at the end of one fragment followed by a letter at the
// start of the next would merge into a different command (`\alpha` + `x`
// reads as `\alphax`), so joins go through `push_fragment`.

/// Whether `latex` ends with a control word such as `\alpha`.
///
/// `\\alpha` (a line break followed by letters) is not a control word.
pub fn ends_with_control_word(latex: &str) -> bool {
    let bytes = latex.as_bytes();
    let letters = bytes
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters == 0 {
        return false;
    }

    let backslashes = bytes[..bytes.len() - letters]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Append `fragment` to `buffer`, separating a trailing control word from a
/// leading letter with one space.
#[inline]
pub fn push_fragment(buffer: &mut String, fragment: &str) {
    let starts_with_letter = fragment
        .as_bytes()
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic());
    if starts_with_letter && ends_with_control_word(buffer) {
        buffer.push(' ');
    }
    buffer.push_str(fragment);
}

/// Concatenate fragments in order with [`push_fragment`]
pub fn concat_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        push_fragment(&mut out, fragment.as_ref());
    }
    out
}

/// Join fragments with a separator
pub fn join_fragments<I, S>(fragments: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(fragment.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_word_detection() {
        assert!(ends_with_control_word("\\alpha"));
        assert!(ends_with_control_word("x+\\beta"));
        assert!(!ends_with_control_word("alpha"));
        assert!(!ends_with_control_word("\\frac{a}{b}"));
        assert!(!ends_with_control_word("a \\\\b"));
        assert!(ends_with_control_word("\\\\\\c"));
        assert!(!ends_with_control_word(""));
        assert!(!ends_with_control_word("\\"));
    }

    #[test]
    fn test_push_fragment_spacing() {
        let mut out = String::from("\\alpha");
        push_fragment(&mut out, "x");
        assert_eq!(out, "\\alpha x");

        let mut out = String::from("\\alpha");
        push_fragment(&mut out, "+1");
        assert_eq!(out, "\\alpha+1");

        let mut out = String::from("ab");
        push_fragment(&mut out, "c");
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_concat_and_join() {
        assert_eq!(concat_fragments(["A", "B"]), "AB");
        assert_eq!(concat_fragments(["\\pi", "r"]), "\\pi r");
        assert_eq!(concat_fragments(Vec::<String>::new()), "");
        assert_eq!(join_fragments(["1", "2", "3"], " & "), "1 & 2 & 3");
        assert_eq!(join_fragments(["x"], " \\\\ "), "x");
    }
}
