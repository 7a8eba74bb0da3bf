use std::cmp::Ordering;

/// Map a character to its case- and diacritic-insensitive form.
///
/// Covers the Latin-1 and Latin Extended-A letters that show up in
/// restaurant menus. Anything else is lowercased as-is.
fn fold_char(c: char) -> char {
    let base = match c {
        'À'..='Å' | 'à'..='å' | 'Ā' | 'ā' | 'Ă' | 'ă' | 'Ą' | 'ą' => 'a',
        'Ç' | 'ç' | 'Ć' | 'ć' | 'Č' | 'č' => 'c',
        'Ď' | 'ď' | 'Đ' | 'đ' => 'd',
        'È'..='Ë' | 'è'..='ë' | 'Ē' | 'ē' | 'Ė' | 'ė' | 'Ę' | 'ę' | 'Ě' | 'ě' => 'e',
        'Ğ' | 'ğ' => 'g',
        'Ì'..='Ï' | 'ì'..='ï' | 'Ī' | 'ī' | 'İ' | 'ı' => 'i',
        'Ł' | 'ł' => 'l',
        'Ñ' | 'ñ' | 'Ń' | 'ń' | 'Ň' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō' | 'ō' | 'Ő' | 'ő' => 'o',
        'Ř' | 'ř' => 'r',
        'Ś' | 'ś' | 'Ş' | 'ş' | 'Š' | 'š' => 's',
        'Ť' | 'ť' | 'Ţ' | 'ţ' => 't',
        'Ù'..='Ü' | 'ù'..='ü' | 'Ū' | 'ū' | 'Ů' | 'ů' | 'Ű' | 'ű' => 'u',
        'Ý' | 'ý' | 'ÿ' | 'Ÿ' => 'y',
        'Ź' | 'ź' | 'Ż' | 'ż' | 'Ž' | 'ž' => 'z',
        _ => c,
    };
    base.to_lowercase().next().unwrap_or(base)
}

/// Fold a whole string for case- and diacritic-insensitive matching.
fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Check if `haystack` contains `needle`, ignoring case and diacritics.
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold(haystack).contains(&fold(needle))
}

/// Equality ignoring case and diacritics.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Compare two strings the way a localized UI list orders them.
///
/// Letters compare case- and diacritic-insensitively, runs of ASCII digits
/// compare by numeric value ("Dish 2" before "Dish 10"). Strings that are
/// equal under those rules fall back to code-point order so the result is
/// a total order.
pub fn cmp_localized(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let ord = cmp_digit_runs(&lhs, &rhs);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = fold_char(x).cmp(&fold_char(y));
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// Numeric comparison of two digit strings of any length.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Upper-case the first letter of every word, lower-case the rest.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Greek Salad", "greek"));
        assert!(contains_ignore_case("Greek Salad", "SALAD"));
        assert!(contains_ignore_case("Crème Brûlée", "creme brulee"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Bruschetta", "pizza"));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Starters", "starters"));
        assert!(eq_ignore_case("entrées", "ENTREES"));
        assert!(!eq_ignore_case("mains", "main"));
    }

    #[test]
    fn test_cmp_localized_case_insensitive() {
        assert_eq!(cmp_localized("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_localized("Banana", "apple"), Ordering::Greater);
        assert_eq!(cmp_localized("Éclair", "Fish"), Ordering::Less);
    }

    #[test]
    fn test_cmp_localized_numeric_runs() {
        assert_eq!(cmp_localized("Dish 2", "Dish 10"), Ordering::Less);
        assert_eq!(cmp_localized("Dish 010", "Dish 9"), Ordering::Greater);
        assert_eq!(cmp_localized("Dish", "Dish 1"), Ordering::Less);
    }

    #[test]
    fn test_cmp_localized_is_total() {
        assert_ne!(cmp_localized("pasta", "Pasta"), Ordering::Equal);
        assert_eq!(cmp_localized("Pasta", "Pasta"), Ordering::Equal);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("starters"), "Starters");
        assert_eq!(capitalize_words("main COURSES"), "Main Courses");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }
}
