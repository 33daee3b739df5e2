//! Built-in word data: the fallback exceptions and the reference vocabularies.

/// Phoneme counts for vocabulary words the CMU dictionary has no entry for.
pub const FALLBACK_EXCEPTIONS: &[(&str, usize)] = &[
    // the "n't" clitic once split off its host
    ("nt", 1),
    ("nonone", 5),
    ("nineth", 4),
    ("won't", 3),
];

/// Function-word vocabulary with contractions split, so "n't" shows up as
/// the bare token "nt". Duplicates are intentional; counts line up with
/// this list.
pub const CONTRACTIONS_SPLIT: &[&str] = &[
    "no", "not", "nt", "yes", "and", "or", "if", "nor", "therefore", "none", "some", "each",
    "every", "all", "most", "few", "many", "several", "few", "both", "everyone", "someone",
    "somebody", "everybody", "nonone", "everything", "something", "nowhere", "somewhere",
    "everywhere", "more", "less", "much", "most", "least", "than", "one", "two", "three", "four",
    "five", "six", "seven", "eight", "nine", "ten", "first", "second", "third", "fourth", "fifth",
    "sixth", "seventh", "eighth", "nineth", "tenth", "last", "can", "could", "need", "may",
    "might", "should", "ought", "must", "maybe", "perhaps", "shall", "will", "would", "won't",
    "any", "anyone", "anything", "anywhere", "anything", "anyway", "anyways", "ever", "yet",
    "the", "a", "an", "this", "that", "these", "those", "always", "usually", "seldom", "never",
    "sometimes", "often", "once", "twice", "now", "while", "after", "before", "then", "until",
    "since", "whenever", "during", "who", "when", "what", "whose", "where", "how", "why", "whom",
    "on", "in", "out", "up", "down", "under", "above", "below", "along", "over", "behind",
    "across", "beside", "between", "beyond", "into", "near", "onto", "toward", "here", "through",
    "here", "there", "because", "but", "although", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "i", "you", "we", "he",
    "she", "they", "me", "us", "her", "him", "them", "my", "your", "our", "his", "their", "its",
    "mine", "yours", "ours", "hers", "theirs", "myself", "yourself", "ourselves", "himself",
    "herself", "yourselves", "themselves", "it", "itself", "again", "too", "also", "another",
    "other", "others", "still", "only", "just", "even", "indeed", "either", "neither", "whether",
    "as", "else", "almost", "already", "except", "for", "from", "instead", "same", "different",
    "such", "with", "without", "about", "by", "very", "unless", "to", "of", "would", "at",
    "against",
];

/// The same vocabulary with contractions kept whole ("don't", "i'm", ...).
pub const CONTRACTIONS_INTACT: &[&str] = &[
    "no", "not", "i'm", "you're", "he's", "she's", "it's", "we're", "they're", "i've", "you've",
    "we've", "they've", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd", "i'll", "you'll",
    "he'll", "she'll", "we'll", "they'll", "don't", "doesn't", "didn't", "isn't", "aren't",
    "wasn't", "weren't", "haven't", "hasn't", "hadn't", "can't", "couldn't", "won't", "wouldn't",
    "shouldn't", "yes", "and", "or", "if", "nor", "therefore", "none", "some", "each", "every",
    "all", "most", "few", "many", "several", "few", "both", "everyone", "someone", "somebody",
    "everybody", "nonone", "everything", "something", "nowhere", "somewhere", "everywhere",
    "more", "less", "much", "most", "least", "than", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine", "ten", "first", "second", "third", "fourth", "fifth", "sixth",
    "seventh", "eighth", "nineth", "tenth", "last", "can", "could", "need", "may", "might",
    "should", "ought", "must", "maybe", "perhaps", "shall", "will", "would", "won't", "any",
    "anyone", "anything", "anywhere", "anything", "anyway", "anyways", "ever", "yet", "the", "a",
    "an", "this", "that", "these", "those", "always", "usually", "seldom", "never", "sometimes",
    "often", "once", "twice", "now", "while", "after", "before", "then", "until", "since",
    "whenever", "during", "who", "when", "what", "whose", "where", "how", "why", "whom", "on",
    "in", "out", "up", "down", "under", "above", "below", "along", "over", "behind", "across",
    "beside", "between", "beyond", "into", "near", "onto", "toward", "here", "through", "here",
    "there", "because", "but", "although", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "i", "you", "we", "he",
    "she", "they", "me", "us", "her", "him", "them", "my", "your", "our", "his", "their", "its",
    "mine", "yours", "ours", "hers", "theirs", "myself", "yourself", "ourselves", "himself",
    "herself", "yourselves", "themselves", "it", "itself", "again", "too", "also", "another",
    "other", "others", "still", "only", "just", "even", "indeed", "either", "neither", "whether",
    "as", "else", "almost", "already", "except", "for", "from", "instead", "such", "with",
    "without", "about", "by", "very", "unless", "to", "of", "would", "at", "against",
];
