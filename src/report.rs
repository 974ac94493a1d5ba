type Json = String;

/// Format the found words as a JSON array of strings.
///
/// The words only hold lowercase ASCII letters, so nothing needs escaping.
pub fn words_to_json(words: &[String]) -> Json {
    // Do not use format!() to avoid its overhead
    let mut json_buffer = Json::with_capacity(2 + words.iter().map(|w| w.len() + 3).sum::<usize>());

    json_buffer.push('[');
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            json_buffer.push(',');
        }
        json_buffer.push('"');
        json_buffer.push_str(word);
        json_buffer.push('"');
    }
    json_buffer.push(']');

    json_buffer
}

/// Format the found words, one per line.
pub fn words_to_lines(words: &[String]) -> String {
    let mut buffer = String::new();
    for word in words {
        buffer.push_str(word);
        buffer.push('\n');
    }
    buffer
}

/// Return the words of `expected` missing from `found` and the words of
/// `found` absent from `expected`, both sorted.
pub fn diff_words(found: &[String], expected: &[String]) -> (Vec<String>, Vec<String>) {
    let mut missing: Vec<_> = expected
        .iter()
        .filter(|w| !found.contains(w))
        .cloned()
        .collect();
    let mut unexpected: Vec<_> = found
        .iter()
        .filter(|w| !expected.contains(w))
        .cloned()
        .collect();

    missing.sort();
    unexpected.sort();
    (missing, unexpected)
}
