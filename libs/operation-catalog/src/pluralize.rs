/// Naive English pluralization for list operation names: `user` →
/// `users`, `category` → `categories`, `address` → `addresses`. Words
/// without a regular plural get a plain `s`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if lower.ends_with('s') || lower.ends_with('x') || lower.ends_with('z') || lower.ends_with("ch") || lower.ends_with("sh")
    {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y') {
        let preceded_by_consonant = stem
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));

        if preceded_by_consonant {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}
