//! Natural-order sort key for product names.
//!
//! Listing sorts by name, but a plain byte comparison puts `Product 10`
//! before `Product 2`. The key rewrites every run of ASCII digits as its
//! significant-digit count (two digits) followed by the digits, so a byte
//! comparison of keys orders numbers by value. Stores persist the key next to
//! the name and sort on it with a binary collation.

/// Build the sort key for a name.
pub fn natural_sort_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 8);
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            flush_digits(&mut key, &mut digits);
            key.push(ch);
        }
    }
    flush_digits(&mut key, &mut digits);

    key
}

fn flush_digits(key: &mut String, digits: &mut String) {
    if digits.is_empty() {
        return;
    }

    let significant = digits.trim_start_matches('0');
    // Runs beyond 99 significant digits share the longest prefix class
    key.push_str(&format!("{:02}", significant.len().min(99)));
    key.push_str(significant);
    digits.clear();
}
