// ============================================================
// Layer 4 — Penn Treebank Tokenizer / Detokenizer
// ============================================================
// Splits a sentence into words the way the Penn Treebank does,
// and glues a list of such words back into running text.
//
// Tokenisation conventions:
//   - opening double quotes become ``   closing quotes become ''
//   - punctuation  : , ; @ # $ % & ? ! ... -- and brackets
//     are split into their own tokens
//   - only the sentence-final period is split off
//     ("U.S." stays one token, "end." becomes "end" ".")
//   - clitics are separated:  can't → ca n't,  he's → he 's
//   - a few fused forms are split:  cannot → can not,  gonna → gon na
//
// The detokenizer undoes every one of these rewrites so that
//   detokenize(tokenize(s)) ≈ s
// for ordinary prose.
//
// Every rule is a (regex, replacement) pair applied in order over
// the whole string. The regexes are compiled once, on first use.

use regex::Regex;
use std::sync::LazyLock;

type Rules = Vec<(Regex, &'static str)>;

fn compile(rules: &[(&str, &'static str)]) -> Rules {
    rules
        .iter()
        .map(|(pattern, rep)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid treebank rule {pattern:?}: {e}"));
            (re, *rep)
        })
        .collect()
}

fn apply(rules: &Rules, text: String) -> String {
    rules
        .iter()
        .fold(text, |acc, (re, rep)| re.replace_all(&acc, *rep).into_owned())
}

// ─── Tokenizer rules ──────────────────────────────────────────────────────────

static TOK_STARTING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
    ])
});

static TOK_PUNCTUATION: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " $0 "),
        // sentence-final period, possibly followed by closing brackets/quotes
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
    ])
});

static TOK_PARENS_BRACKETS: LazyLock<Rules> =
    LazyLock::new(|| compile(&[(r"[\]\[(){}<>]", " $0 ")]));

static TOK_DOUBLE_DASHES: LazyLock<Rules> = LazyLock::new(|| compile(&[(r"--", " -- ")]));

static TOK_ENDING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r#"""#, " '' "),
        (r"(\S)('')", "$1 $2 "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
    ])
});

static TOK_CONTRACTIONS: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)(\s)", " $1 $2$3"),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ])
});

// ─── Detokenizer rules ────────────────────────────────────────────────────────

static DETOK_CONTRACTIONS: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"(?i) ('t)\s(is)\b", "$1$2"),
        (r"(?i) ('t)\s(was)\b", "$1$2"),
        (r"(?i)\b(can)\s(not)\b", "$1$2"),
        (r"(?i)\b(d)\s('ye)\b", "$1$2"),
        (r"(?i)\b(gim)\s(me)\b", "$1$2"),
        (r"(?i)\b(gon)\s(na)\b", "$1$2"),
        (r"(?i)\b(got)\s(ta)\b", "$1$2"),
        (r"(?i)\b(lem)\s(me)\b", "$1$2"),
        (r"(?i)\b(more)\s('n)\b", "$1$2"),
        (r"(?i)\b(wan)\s(na)(\s)", "$1$2$3"),
    ])
});

static DETOK_ENDING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"([^' ])\s('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1$2 "),
        (r"([^' ])\s('[sS]|'[mM]|'[dD]|') ", "$1$2 "),
        (r"(\S)\s('')", "$1$2"),
        (r"('')\s([.,:)\]>};%])", "$1$2"),
        (r"''", "\""),
    ])
});

static DETOK_DOUBLE_DASHES: LazyLock<Rules> = LazyLock::new(|| compile(&[(r" -- ", "--")]));

static DETOK_PARENS_BRACKETS: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"([\[({<])\s", "$1"),
        (r"\s([\])}>])", "$1"),
        (r"([\])}>])\s([:;,.])", "$1$2"),
    ])
});

static DETOK_PUNCTUATION: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"([^'])\s'\s", "$1' "),
        (r"\s([?!])", "$1"),
        (r#"([^.])\s(\.)([\])}>"']*)\s*$"#, "$1$2$3"),
        (r"([#$])\s", "$1"),
        (r"\s([;%])", "$1"),
        (r"\s\.\.\.\s", "..."),
        (r"\s([:,])", "$1"),
    ])
});

static DETOK_STARTING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    compile(&[
        (r"([ (\[{<])\s``", "$1``"),
        (r"(``)\s", "$1"),
        (r"``", "\""),
    ])
});

// ─── Public API ───────────────────────────────────────────────────────────────

/// Stateless Penn Treebank word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = apply(&TOK_STARTING_QUOTES, text.to_string());
        text = apply(&TOK_PUNCTUATION, text);
        text = apply(&TOK_PARENS_BRACKETS, text);
        text = apply(&TOK_DOUBLE_DASHES, text);

        // Padding lets the ending-quote and clitic rules anchor on spaces
        text = format!(" {text} ");
        text = apply(&TOK_ENDING_QUOTES, text);
        text = apply(&TOK_CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Inverse of [`TreebankTokenizer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankDetokenizer;

impl TreebankDetokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let joined = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        let mut text = format!(" {joined} ");
        text = apply(&DETOK_CONTRACTIONS, text);
        text = apply(&DETOK_ENDING_QUOTES, text);

        text = text.trim().to_string();
        text = apply(&DETOK_DOUBLE_DASHES, text);
        text = apply(&DETOK_PARENS_BRACKETS, text);
        text = apply(&DETOK_PUNCTUATION, text);
        text = apply(&DETOK_STARTING_QUOTES, text);

        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Vec<String> {
        TreebankTokenizer::new().tokenize(s)
    }

    fn detok(tokens: &[&str]) -> String {
        TreebankDetokenizer::new().detokenize(tokens)
    }

    #[test]
    fn test_splits_comma_and_final_period() {
        assert_eq!(tok("Hello, world."), vec!["Hello", ",", "world", "."]);
    }

    #[test]
    fn test_keeps_inner_periods() {
        assert_eq!(tok("The U.S. economy grew."), vec!["The", "U.S.", "economy", "grew", "."]);
    }

    #[test]
    fn test_splits_clitics() {
        assert_eq!(tok("I can't go."), vec!["I", "ca", "n't", "go", "."]);
        assert_eq!(tok("She's here"), vec!["She", "'s", "here"]);
    }

    #[test]
    fn test_splits_fused_forms() {
        assert_eq!(tok("I cannot stay"), vec!["I", "can", "not", "stay"]);
        assert_eq!(tok("we wanna leave"), vec!["we", "wan", "na", "leave"]);
    }

    #[test]
    fn test_quotes_become_treebank_quotes() {
        assert_eq!(
            tok(r#"He said "hi"."#),
            vec!["He", "said", "``", "hi", "''", "."]
        );
    }

    #[test]
    fn test_brackets_and_question_marks() {
        assert_eq!(tok("(really?)"), vec!["(", "really", "?", ")"]);
    }

    #[test]
    fn test_arabic_text_only_splits_ascii_punctuation() {
        assert_eq!(
            tok("ذهب الولد إلى المدرسة."),
            vec!["ذهب", "الولد", "إلى", "المدرسة", "."]
        );
    }

    #[test]
    fn test_detokenize_reattaches_punctuation() {
        assert_eq!(detok(&["Hello", ",", "world", "."]), "Hello, world.");
        assert_eq!(detok(&["(", "really", "?", ")"]), "(really?)");
    }

    #[test]
    fn test_detokenize_reattaches_clitics() {
        assert_eq!(detok(&["I", "ca", "n't", "go", "."]), "I can't go.");
        assert_eq!(detok(&["I", "can", "not", "stay"]), "I cannot stay");
    }

    #[test]
    fn test_detokenize_restores_quotes() {
        assert_eq!(detok(&["He", "said", "``", "hi", "''", "."]), r#"He said "hi"."#);
    }

    #[test]
    fn test_round_trip_plain_sentence() {
        let s = "The cat sat on the mat, then left.";
        let tokens = tok(s);
        assert_eq!(TreebankDetokenizer::new().detokenize(&tokens), s);
    }

    #[test]
    fn test_empty_input() {
        assert!(tok("").is_empty());
        assert_eq!(detok(&[]), "");
    }
}
