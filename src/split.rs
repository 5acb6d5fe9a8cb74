/// Splits `input` at every `delimiter`, borrowing the tokens from the input.
///
/// Empty tokens are kept, including the ones before a leading and after a
/// trailing delimiter. An empty input produces no tokens at all.
pub fn split_borrowed(input: &str, delimiter: char) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(delimiter).collect()
}

/// Owned variant of [`split_borrowed`].
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    split_borrowed(input, delimiter)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Inverse of [`split`] for any non-empty input.
pub fn join<S: AsRef<str>>(tokens: &[S], delimiter: char) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(token.as_ref());
    }
    out
}
