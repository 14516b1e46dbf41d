// ============================================================
// Layer 4 — Line Preprocessor
// ============================================================
// Cleans one raw input line before stopword removal. The cleaned
// text only feeds the corrupted side; the target keeps the line as
// read, trimmed.
//
// Scraped corpora often contain:
//   - Non-breaking spaces (U+00A0)
//   - Zero-width spaces (U+200B) and byte order marks (U+FEFF)
//   - Tab characters and stray control characters
//   - Runs of spaces left over from formatting
//
// The Treebank tokenizer would otherwise see these as content
// and glue them onto neighbouring words. Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants and controls with a space
//   2. Collapse runs of spaces into one
//   3. Trim leading/trailing whitespace
//
// With normalisation disabled, a line is only trimmed.

pub struct Preprocessor {
    normalize: bool,
}

impl Preprocessor {
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    /// Clean a single line. Never returns a string containing '\n'.
    pub fn clean_line(&self, line: &str) -> String {
        if !self.normalize {
            return line.trim().to_string();
        }

        let mut out        = String::with_capacity(line.len());
        let mut last_space = true; // suppresses leading spaces

        for c in line.chars() {
            let c = match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            };

            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        out.trim_end().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(true)
    }
}
