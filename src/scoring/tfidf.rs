use std::collections::{HashMap, HashSet};

use crate::models::Feedback;
use crate::scoring::strategy::{ScoreResult, ScoringStrategy, StrategyKind};

/// Holistic similarity mode: JD and resume form a two-document corpus,
/// each is turned into a TF-IDF vector over the shared vocabulary, and the
/// score is the cosine of the angle between them, scaled to 0-100 and
/// rounded to two decimal places. No per-category breakdown exists.
pub struct TfidfStrategy {
    jd_text: String,
}

impl TfidfStrategy {
    pub fn new(jd_text: &str) -> Self {
        Self {
            jd_text: jd_text.to_string(),
        }
    }
}

impl ScoringStrategy for TfidfStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tfidf
    }

    fn score(&self, resume_text: &str) -> ScoreResult {
        ScoreResult {
            score: similarity(&self.jd_text, resume_text),
            feedback: Feedback::Similarity,
        }
    }
}

/// TF-IDF cosine similarity between two documents, as a 0-100 percentage.
/// Degenerate input (either document empty of usable terms) reports 0.0
/// rather than failing.
pub fn similarity(a: &str, b: &str) -> f64 {
    let terms_a = term_counts(a);
    let terms_b = term_counts(b);

    if terms_a.is_empty() || terms_b.is_empty() {
        return 0.0;
    }

    let vocabulary: HashSet<&String> = terms_a.keys().chain(terms_b.keys()).collect();

    // Smoothed IDF over the two-document corpus:
    // idf(t) = ln((1 + n) / (1 + df(t))) + 1, with n = 2.
    let mut vec_a = Vec::with_capacity(vocabulary.len());
    let mut vec_b = Vec::with_capacity(vocabulary.len());
    for term in vocabulary {
        let tf_a = *terms_a.get(term).unwrap_or(&0) as f64;
        let tf_b = *terms_b.get(term).unwrap_or(&0) as f64;
        let df = (tf_a > 0.0) as u32 + (tf_b > 0.0) as u32;
        let idf = (3.0 / (1.0 + df as f64)).ln() + 1.0;
        vec_a.push(tf_a * idf);
        vec_b.push(tf_b * idf);
    }

    let cosine = cosine_similarity(&vec_a, &vec_b);
    (cosine * 100.0 * 100.0).round() / 100.0
}

/// Lower-cased alphanumeric terms of length >= 2, stop words removed.
fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !STOP_WORDS.contains(t))
    {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Common English stop words, excluded from the vocabulary so function
/// words do not dominate the similarity.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
];
