use stepgraph::core::{normalize, Normalization, Normalizer};

#[test]
fn test_plain_text_is_a_fixed_point() {
    let text = "I open the login page";
    assert_eq!(normalize(text, text), text);
}

#[test]
fn test_quotes_are_replaced_before_digits() {
    assert_eq!(normalize("", r#"I have "5" apples"#), "I have ??? apples");
    assert_eq!(normalize("", "wait 5 seconds"), "wait # seconds");
}

#[test]
fn test_shorter_candidate_keeps_the_current_label() {
    let current = "a very long previous label that is long";
    assert_eq!(normalize(current, "x"), current);
}

#[test]
fn test_equal_length_candidate_replaces_the_label() {
    // same length, different template
    assert_eq!(normalize("I see # alerts", "I saw 4 alerts"), "I saw # alerts");
}

#[test]
fn test_label_sequence_over_many_texts() {
    let normalizer = Normalizer::default();
    let texts = [
        r#"I log in as "alice""#,
        r#"I log in as "bob" with 2 factors"#,
        r#"I log in as "carol""#,
    ];

    let label = texts
        .iter()
        .fold(String::new(), |label, text| normalizer.normalize(&label, text));

    assert_eq!(label, "I log in as ??? with # factors");
}

#[test]
fn test_evaluate_reports_the_dropped_candidate() {
    let normalizer = Normalizer::default();
    let outcome = normalizer.evaluate("I enter pin #", "Done");

    assert!(outcome.is_anomaly());
    assert_eq!(
        outcome,
        Normalization::Retained {
            candidate: "Done".to_string()
        }
    );
}

#[test]
fn test_custom_placeholders() {
    let normalizer = Normalizer::new("<str>", "<num>");
    assert_eq!(
        normalizer.normalize("", r#"I buy 3 "red" apples"#),
        "I buy <num> <str> apples"
    );
}

#[test]
fn test_unterminated_quote_is_left_alone() {
    assert_eq!(normalize("", r#"I type "oops 12"#), r#"I type "oops #"#);
}

#[test]
fn test_emoji_length_follows_utf16_units() {
    // "I see 🎉" is 8 UTF-16 units, as long as "I see ab"
    assert_eq!(normalize("I see ab", "I see 🎉"), "I see 🎉");
    assert!(Normalizer::default().evaluate("I see abc", "I see 🎉").is_anomaly());
}
