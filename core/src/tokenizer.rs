use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref ENGLISH_NOISE_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Words excluded from indexing. Stored lower-cased; fixed once indexing starts.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// The built-in English list, used when no noise-word file is configured.
    pub fn english() -> Self {
        ENGLISH_NOISE_WORDS.iter().copied().collect()
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut noise = NoiseWords::new();
        for word in iter {
            noise.insert(word.as_ref());
        }
        noise
    }
}

/// Extract the keyword carried by a single whitespace-delimited token.
///
/// The token is read as a run of letters followed by a run of non-letters.
/// Anything after that second run disqualifies the token, so punctuation is
/// only tolerated at the end (`"Apple."` is `apple`, `"don't"` is nothing).
/// The letters are lower-cased and dropped if empty or a noise word.
pub fn get_keyword(token: &str, noise: &NoiseWords) -> Option<String> {
    let prefix_end = token
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(token.len(), |(i, _)| i);
    let (prefix, rest) = token.split_at(prefix_end);

    // rest starts with a non-letter; a letter anywhere after it is a suffix
    if rest.chars().any(char::is_alphabetic) {
        return None;
    }

    // lower-casing can expand a letter into a combining mark ('İ' -> "i\u{307}")
    let keyword = prefix.to_lowercase();
    if keyword.is_empty() || !keyword.chars().all(char::is_alphabetic) || noise.contains(&keyword) {
        return None;
    }
    Some(keyword)
}
