//! Code-versus-concept classification of submitted text.

use ccommon::SourceKind;

const CODE_MARKERS: [&str; 10] = [
    "fn ", "def ", "class ", "function ", "import ", "#include", "return ", "=>", "&&", "()",
];

/// Decides whether submitted text reads as source code or as a freeform
/// concept question. Lines ending in structural punctuation are the
/// strongest signal; keyword markers cover one-liners.
pub fn classify_source(text: &str) -> SourceKind {
    let structural = text
        .lines()
        .map(str::trim_end)
        .filter(|line| line.ends_with(';') || line.ends_with('{') || line.ends_with('}'))
        .count();

    if structural >= 2 {
        return SourceKind::Code;
    }

    if CODE_MARKERS.iter().any(|marker| text.contains(marker)) {
        return SourceKind::Code;
    }

    SourceKind::Concept
}

#[cfg(test)]
mod tests {
    use ccommon::SourceKind;

    use super::classify_source;

    #[test]
    fn braced_statement_blocks_classify_as_code() {
        let text = "int main() {\n    printf(\"hi\");\n    return 0;\n}";
        assert_eq!(classify_source(text), SourceKind::Code);
    }

    #[test]
    fn keyword_one_liners_classify_as_code() {
        assert_eq!(classify_source("def add(a, b): return a + b"), SourceKind::Code);
    }

    #[test]
    fn prose_questions_classify_as_concept() {
        let text = "What is the difference between a stack and a queue?";
        assert_eq!(classify_source(text), SourceKind::Concept);
    }
}
