use regex::Regex;
use std::sync::LazyLock;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

/// Convert a CamelCase or mixedCase identifier to snake_case.
///
/// An `_` goes before every ASCII uppercase letter except one in first
/// position, then the whole string is lowercased. Runs of capitals are not
/// treated as one word: `"HTTPServer"` becomes `"h_t_t_p_server"`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut last = 0;
    for m in UPPERCASE.find_iter(name) {
        if m.start() == 0 {
            continue;
        }
        out.push_str(&name[last..m.start()]);
        out.push('_');
        last = m.start();
    }
    out.push_str(&name[last..]);
    out.to_lowercase()
}

/// Remove `prefix` from the start of a record name if it is there.
///
/// Exact, case-sensitive match only.
pub fn strip_record_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("a", "a")]
    #[case("order", "order")]
    #[case("sku_code", "sku_code")]
    #[case("v2", "v2")]
    fn leaves_lowercase_untouched(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    #[case("orderId", "order_id")]
    #[case("lineItems", "line_items")]
    #[case("LineItem", "line_item")]
    #[case("UserOrderCreatedEvent", "user_order_created_event")]
    #[case("Foobar", "foobar")]
    #[case("address2Line", "address2_line")]
    fn splits_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    #[case("ABC", "a_b_c")]
    #[case("HTTPServer", "h_t_t_p_server")]
    #[case("userID", "user_i_d")]
    fn separates_every_capital_of_an_acronym(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn existing_underscores_are_kept() {
        assert_eq!(to_snake_case("created_At"), "created__at");
        assert_eq!(to_snake_case("_Private"), "__private");
    }

    #[test]
    fn separator_count_matches_internal_capitals() {
        for name in ["orderId", "UserOrderCreatedEvent", "aBcDeF", "XMLHttpRequest"] {
            let internal = name.chars().skip(1).filter(char::is_ascii_uppercase).count();
            let before = name.matches('_').count();
            let snake = to_snake_case(name);
            assert_eq!(snake.matches('_').count() - before, internal, "{name}");
            assert_eq!(snake, snake.to_lowercase());
        }
    }

    #[test]
    fn only_ascii_capitals_get_a_separator() {
        assert_eq!(to_snake_case("straßeÜber"), "straßeüber");
    }

    #[rstest]
    #[case("UserOrderCreatedEvent", "User", "OrderCreatedEvent")]
    #[case("LineItem", "User", "LineItem")]
    #[case("UserOrder", "user", "UserOrder")]
    #[case("UserOrder", "", "UserOrder")]
    #[case("User", "User", "")]
    fn strips_exact_prefix_only(#[case] name: &str, #[case] prefix: &str, #[case] expected: &str) {
        assert_eq!(strip_record_prefix(name, prefix), expected);
    }
}
