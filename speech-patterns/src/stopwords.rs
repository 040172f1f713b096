//! Stopword and noise lexicons used by keyword discovery and phrase ranking.

/// Words ignored when mining candidate topic keywords.
pub const DISCOVERY_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "are", "at", "be", "been",
    "before", "below", "between", "billion", "both", "but", "by", "can", "cent", "chairman",
    "committee", "continue", "could", "did", "do", "does", "during", "each", "ensure", "few",
    "for", "from", "further", "give", "government", "had", "has", "have", "help", "here", "house",
    "how", "i", "in", "into", "is", "just", "madam", "make", "may", "member", "members", "might",
    "million", "more", "most", "mr", "mrs", "ms", "must", "need", "new", "no", "nor", "not", "now",
    "of", "on", "once", "only", "or", "other", "our", "own", "parliament", "per", "percent",
    "provide", "said", "same", "should", "singapore", "sir", "so", "some", "speaker", "such",
    "support", "take", "than", "that", "the", "then", "there", "these", "this", "those", "through",
    "to", "too", "under", "up", "very", "was", "we", "were", "when", "where", "why", "will",
    "with", "work", "would", "year", "years",
];

/// Function words that may not open or close a ranked phrase.
pub const PHRASE_STOPWORDS: &[&str] = &[
    "a", "about", "accordingly", "after", "again", "all", "already", "also", "although", "an",
    "and", "are", "as", "at", "be", "because", "been", "before", "being", "billion", "both", "but",
    "by", "can", "cent", "chairman", "could", "did", "do", "does", "doing", "done", "during",
    "each", "eight", "even", "every", "few", "first", "five", "for", "four", "from", "further",
    "get", "getting", "going", "government", "had", "has", "have", "having", "he", "hence", "her",
    "here", "him", "his", "house", "how", "however", "i", "if", "in", "into", "is", "it", "its",
    "just", "last", "like", "made", "make", "making", "many", "may", "me", "members", "might",
    "million", "minister", "ministry", "more", "moreover", "most", "mr", "much", "must", "my",
    "need", "new", "next", "nine", "no", "nor", "not", "now", "of", "on", "once", "one", "only",
    "or", "other", "our", "over", "parliament", "per", "percent", "same", "second", "seven",
    "shall", "she", "should", "singapore", "singaporeans", "sir", "six", "so", "some", "speaker",
    "still", "such", "ten", "than", "that", "the", "their", "them", "then", "there", "therefore",
    "these", "they", "third", "this", "those", "though", "three", "through", "thus", "to", "too",
    "two", "under", "unless", "until", "us", "very", "want", "was", "we", "well", "were", "what",
    "when", "where", "which", "while", "who", "why", "will", "with", "would", "year", "years",
    "you", "your",
];

/// Procedural phrases that are frequent in every speech.
pub const BORING_PHRASES: &[&str] = &[
    "000", "000 000", "annex a", "annex b", "annex c", "annex d", "annex e", "budget debate",
    "budget speech", "chok tong", "committee of supply", "d expenditure", "document full",
    "document please", "dr goh", "dr goh keng", "dr richard", "dr tony", "dr tony tan",
    "financial year", "fiscal year", "full text", "goh chok", "goh chok tong", "goh keng",
    "goh keng swee", "hansard document", "heng swee", "heng swee keat", "hon members", "hon sui",
    "hon sui sen", "hsien loong", "hu tsu", "hu tsu tau", "keng swee", "kim san", "last year",
    "lawrence wong", "lee hsien", "lee hsien loong", "lim kim", "lim kim san", "mr chairman",
    "mr speaker", "next year", "per cent", "please refer", "please refer toannex", "r d",
    "refer annex", "refer document", "refer hansard", "refer to annex", "refer to hansard",
    "refer toannex", "richard hu", "s c", "see hansard", "shanmugaratnam", "sui sen",
    "supply bill", "swee keat", "tan keng", "text available", "tharman shanmugaratnam",
    "this year", "toannex", "tony tan", "tony tan keng", "tsu tau",
];
