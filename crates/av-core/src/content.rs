//! Static page content: the hero words, the jargon list and the services.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub const DEFAULT_WORDS: [&str; 4] = ["Growth", "Design", "Scaling", "Starting"];

pub const DEFAULT_TRUTHS: [(&str, &str); 5] = [
    ("Scaling at Speed", "Breaking things faster than you can fix them."),
    ("Strategic Pivot", "We realized the first idea wasn't going to work."),
    ("Disruptive Innovation", "Making people uncomfortable by changing the status quo."),
    ("Synergy", "Admitting we actually need each other to survive."),
    ("Fail Fast", "It hurts, it's expensive, and it's the only way to learn."),
];

pub const DEFAULT_SERVICES: [(&str, &str); 4] = [
    ("Venture Incubation", "Turning 'bad' ideas into viable markets."),
    ("Radical Leadership", "Stripping away the ego to build resilient teams."),
    ("DEI as Strategy", "Not a checklist. A competitive advantage."),
    ("Operational Friction", "Finding the bottlenecks that everyone is ignoring."),
];

/// Ordered, non-empty list of hero words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new<I, S>(words: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(CoreError::EmptyWordList);
        }
        Ok(Self(words))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Word at `index`, wrapping past the end of the list.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Widest word by character count. The hero reserves its width so the
    /// sentence does not shift while words rotate.
    pub fn longest(&self) -> &str {
        self.iter()
            .fold(self.get(0), |widest, word| {
                if word.chars().count() > widest.chars().count() {
                    word
                } else {
                    widest
                }
            })
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = CoreError;

    fn try_from(words: Vec<String>) -> CoreResult<Self> {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.0
    }
}

/// Corporate phrase and what it actually means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JargonEntry {
    pub corporate: String,
    pub reality: String,
}

impl JargonEntry {
    pub fn new(corporate: impl Into<String>, reality: impl Into<String>) -> Self {
        Self {
            corporate: corporate.into(),
            reality: reality.into(),
        }
    }

    /// Reality text as rendered, behind a comment marker.
    pub fn reality_caption(&self) -> String {
        format!("// {}", self.reality)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
}

impl Service {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the page displays that is not markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub words: WordList,
    pub truths: Vec<JargonEntry>,
    pub services: Vec<Service>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            words: WordList::default(),
            truths: DEFAULT_TRUTHS
                .iter()
                .map(|(corporate, reality)| JargonEntry::new(*corporate, *reality))
                .collect(),
            services: DEFAULT_SERVICES
                .iter()
                .map(|(title, description)| Service::new(*title, *description))
                .collect(),
        }
    }
}
