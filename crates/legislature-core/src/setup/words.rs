//! Word Lists and Bill Names
//!
//! Bill names are an adjective and a noun followed by "bill", title-cased.
//! Both lists ship with the binary and can be replaced by files.

use rand::Rng;
use std::fs;
use std::path::Path;

use crate::error::SetupError;

const BUILTIN_ADJECTIVES: &str = include_str!("../../data/adjectives.txt");
const BUILTIN_NOUNS: &str = include_str!("../../data/nouns.txt");

/// A non-empty, ordered list of words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Split `text` on whitespace. `list` names the list in error messages.
    pub fn parse(list: &'static str, text: &str) -> Result<Self, SetupError> {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Err(SetupError::EmptyWordList { list });
        }
        Ok(Self { words })
    }

    /// Read and parse a word list file.
    pub fn load(list: &'static str, path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SetupError::WordListIo {
            list,
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(list, &text)
    }

    pub fn builtin_adjectives() -> Result<Self, SetupError> {
        Self::parse("adjectives", BUILTIN_ADJECTIVES)
    }

    pub fn builtin_nouns() -> Result<Self, SetupError> {
        Self::parse("nouns", BUILTIN_NOUNS)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

/// Composes bill names from an adjective list and a noun list.
#[derive(Debug, Clone)]
pub struct BillNamer {
    adjectives: WordList,
    nouns: WordList,
}

impl BillNamer {
    pub fn new(adjectives: WordList, nouns: WordList) -> Self {
        Self { adjectives, nouns }
    }

    /// Namer backed by the word lists compiled into the binary.
    pub fn builtin() -> Result<Self, SetupError> {
        Ok(Self::new(WordList::builtin_adjectives()?, WordList::builtin_nouns()?))
    }

    /// Load either list from a file, falling back to the built-in list.
    pub fn from_paths(
        adjectives: Option<&Path>,
        nouns: Option<&Path>,
    ) -> Result<Self, SetupError> {
        let adjectives = match adjectives {
            Some(path) => WordList::load("adjectives", path)?,
            None => WordList::builtin_adjectives()?,
        };
        let nouns = match nouns {
            Some(path) => WordList::load("nouns", path)?,
            None => WordList::builtin_nouns()?,
        };
        Ok(Self::new(adjectives, nouns))
    }

    /// "Adjective Noun Bill"
    pub fn name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = self.adjectives.choose(rng);
        let noun = self.nouns.choose(rng);
        title_case(&format!("{} {} bill", adjective, noun))
    }
}

/// Capitalize the first letter of every space-separated segment.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
