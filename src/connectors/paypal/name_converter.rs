//! camelCase <-> snake_case conversion between struct field names and PayPal wire keys.
//!
//! Mirrors the behaviour of Symfony's `CamelCaseToSnakeCaseNameConverter`, which the
//! PayPal REST payloads were historically mapped with, including its handling of
//! leading, repeated and trailing separators.

fn is_separator(c: char) -> bool {
    c == '_' || c == '.'
}

fn lcfirst(value: String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => value,
    }
}

/// camelCase field name -> snake_case wire key (`clientId` -> `client_id`).
pub fn normalize(camel_case: &str) -> String {
    let camel_case = lcfirst(camel_case.to_string());
    let mut snake_case = String::with_capacity(camel_case.len() + 4);
    for c in camel_case.chars() {
        if c.is_ascii_uppercase() {
            snake_case.push('_');
        }
        snake_case.push(c.to_ascii_lowercase());
    }
    snake_case
}

/// snake_case wire key -> camelCase field name (`client_id` -> `clientId`).
///
/// A run of `_`/`.` upper-cases the following character; a run ending in `.` keeps a
/// single `_`. Trailing separator runs collapse onto their last character.
pub fn denormalize(snake_case: &str) -> String {
    let chars: Vec<char> = snake_case.chars().collect();
    let mut camel_case = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let run_start = i;
        while i < chars.len() && is_separator(chars[i]) {
            i += 1;
        }
        let run = &chars[run_start..i];

        if i < chars.len() {
            if run_start == 0 || !run.is_empty() {
                if run.last() == Some(&'.') {
                    camel_case.push('_');
                }
                camel_case.extend(chars[i].to_uppercase());
            } else {
                camel_case.push(chars[i]);
            }
            i += 1;
        } else if run.len() >= 2 {
            if run[run.len() - 2] == '.' {
                camel_case.push('_');
            }
            camel_case.push(run[run.len() - 1]);
        } else {
            camel_case.extend(run);
        }
    }

    lcfirst(camel_case)
}
