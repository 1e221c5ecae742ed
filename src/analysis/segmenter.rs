/*!
 * Sentence segmentation.
 *
 * A sentence ends at `.`, `!` or `?` when the next character is whitespace,
 * or at the end of the text. Abbreviations and quotations are not handled.
 */

/// Characters that can close a sentence.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split raw text into trimmed, non-empty sentences in document order.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !TERMINATORS.contains(&ch) {
            continue;
        }

        let boundary = idx + ch.len_utf8();
        if chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
            push_trimmed(&mut sentences, &text[start..boundary]);
            start = boundary;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

/// Classification of a sentence by its closing punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
    Declarative,
    Interrogative,
    Exclamative,
}

impl SentenceType {
    /// `?` wins over `!`, anything else is declarative.
    pub fn classify(sentence: &str) -> Self {
        let sentence = sentence.trim_end();
        if sentence.ends_with('?') {
            SentenceType::Interrogative
        } else if sentence.ends_with('!') {
            SentenceType::Exclamative
        } else {
            SentenceType::Declarative
        }
    }
}
