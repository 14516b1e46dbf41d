// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `noise`, and all
// their configurable flags.
//
// Flags are kebab-case; the underscore spellings used by older
// preprocessing scripts (--max_length, --save_noised_output, ...)
// are accepted as aliases.

use clap::{Args, Subcommand};

use crate::application::{
    noise_use_case::NoiseConfig,
    prepare_use_case::{PrepareConfig, DEFAULT_STOPWORDS},
};
use crate::infra::tokenizer_store::DEFAULT_TOKENIZER;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build corrupted/original pairs from a file of raw sentences
    Prepare(PrepareArgs),

    /// Add synonym/shuffle noise to an existing pair CSV
    Noise(NoiseArgs),
}

/// All arguments for the `prepare` command
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Raw sentences, one per line (UTF-8). Blank lines are skipped and
    /// counted, not written as empty pairs
    #[arg(long)]
    pub input: String,

    /// CSV of corrupted,original pairs (stopwords removed)
    #[arg(long)]
    pub output: String,

    /// Stopword list, one word per line. If the default file is missing,
    /// arabic_synonyms.txt in the same directory is used instead
    #[arg(long, default_value = DEFAULT_STOPWORDS)]
    pub stopwords: String,

    /// Pretrained tokenizer: path to tokenizer.json or a hub model id
    #[arg(long, default_value = DEFAULT_TOKENIZER)]
    pub tokenizer: String,

    /// Pairs whose combined token count reaches this are skipped
    #[arg(long, alias = "max_length", default_value_t = 1024)]
    pub max_length: usize,

    /// Also write a copy with synonym replacement and shuffling
    #[arg(long, alias = "save_noised_output")]
    pub save_noised_output: bool,

    /// Path of the noised copy [default: <OUTPUT>.0]
    #[arg(long, alias = "noised_output")]
    pub noised_output: Option<String>,

    /// Synonym lexicon used for replacement noise
    #[arg(long)]
    pub synonyms: Option<String>,

    /// Probability of shuffling a sentence's word order
    #[arg(long, alias = "shuffle_ratio", default_value_t = 0.2)]
    pub shuffle_ratio: f64,

    /// Fraction of words targeted for synonym replacement
    #[arg(long, alias = "replace_ratio", default_value_t = 0.2)]
    pub replace_ratio: f64,

    /// Random seed for the noising stage
    #[arg(long, default_value_t = 1234)]
    pub seed: u64,

    /// Skip whitespace cleaning before stopword removal. The original
    /// column is always the input line, trimmed
    #[arg(long)]
    pub no_normalize: bool,

    /// Write the run configuration and counts to this JSON file
    #[arg(long)]
    pub manifest: Option<String>,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input:              a.input,
            output:             a.output,
            stopwords:          a.stopwords,
            tokenizer:          a.tokenizer,
            max_length:         a.max_length,
            save_noised_output: a.save_noised_output,
            noised_output:      a.noised_output,
            synonyms:           a.synonyms,
            shuffle_ratio:      a.shuffle_ratio,
            replace_ratio:      a.replace_ratio,
            seed:               a.seed,
            normalize:          !a.no_normalize,
            manifest:           a.manifest,
        }
    }
}

/// All arguments for the `noise` command
#[derive(Args, Debug)]
pub struct NoiseArgs {
    /// Pair CSV produced by `prepare`
    #[arg(long)]
    pub input: String,

    /// Where to write the noised pairs
    #[arg(long)]
    pub output: String,

    /// Words never chosen for replacement, one per line
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Synonym lexicon used for replacement noise
    #[arg(long)]
    pub synonyms: Option<String>,

    #[arg(long, alias = "shuffle_ratio", default_value_t = 0.2)]
    pub shuffle_ratio: f64,

    #[arg(long, alias = "replace_ratio", default_value_t = 0.2)]
    pub replace_ratio: f64,

    #[arg(long, default_value_t = 1234)]
    pub seed: u64,
}

impl From<NoiseArgs> for NoiseConfig {
    fn from(a: NoiseArgs) -> Self {
        NoiseConfig {
            input:         a.input,
            output:        a.output,
            stopwords:     a.stopwords,
            synonyms:      a.synonyms,
            shuffle_ratio: a.shuffle_ratio,
            replace_ratio: a.replace_ratio,
            seed:          a.seed,
        }
    }
}
