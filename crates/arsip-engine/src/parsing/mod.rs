//! # Article Markup Parsing
//!
//! Two article dialects exist, selected per archive by [`MarkupProfile`]:
//!
//! - **Line-prefix** (`blocks` + `inline`): one block per line, the line
//!   prefix decides the kind (`#` heading, `-` list item, `@@` image).
//! - **Paired** (`paired`): constructs wrapped on both sides, first line
//!   holds the title.
//!
//! Parsing never fails; anything unrecognized stays text.

pub mod blocks;
pub mod inline;
pub mod paired;
pub mod snapshot;

use serde::{Deserialize, Serialize};

use blocks::{BlockBuilder, BlockNode, LinePrefixClassifier};
use paired::{PairedDoc, parse_paired};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupProfile {
    #[default]
    LinePrefix,
    Paired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// An article parsed under one of the profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Article {
    LinePrefix(ParsedDoc),
    Paired(PairedDoc),
}

/// Parses line-prefix markup. Lines are split on `\n` only; a trailing
/// `\r` is removed by the classifier's trim.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = LinePrefixClassifier;
    let mut builder = BlockBuilder::new();

    for (line, raw) in text.split('\n').enumerate() {
        let lc = classifier.classify(line, raw);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

pub fn parse_article(text: &str, profile: MarkupProfile) -> Article {
    match profile {
        MarkupProfile::LinePrefix => Article::LinePrefix(parse_document(text)),
        MarkupProfile::Paired => Article::Paired(parse_paired(text)),
    }
}
