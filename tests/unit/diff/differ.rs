use super::*;

fn values(changes: &[RawChange]) -> Vec<&str> {
    changes.iter().map(|c| c.value.as_str()).collect()
}

#[test]
fn tokenize_splits_words_and_single_symbols() {
    assert_eq!(
        tokenize("const [a_b] = f(12);\n"),
        vec![
            "const", " ", "[", "a_b", "]", " ", "=", " ", "f", "(", "12", ")", ";", "\n"
        ]
    );
    assert_eq!(tokenize("  "), vec![" ", " "]);
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_handles_multibyte_text() {
    let text = "“remember” größe";
    assert_eq!(tokenize(text), vec!["“", "remember", "”", " ", "größe"]);
    assert_eq!(tokenize(text).concat(), text);
}

#[test]
fn absent_previous_is_one_added_span() {
    let changes = diff_content(None, "a;\nb;");
    assert_eq!(
        changes,
        vec![RawChange {
            value: "a;\nb;".to_string(),
            added: true,
            removed: false,
        }]
    );
}

#[test]
fn absent_previous_with_empty_content_still_yields_one_span() {
    let changes = diff_content(None, "");
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].value, "");
    assert!(changes[0].added);
}

#[test]
fn insertion_is_isolated() {
    let changes = diff_content(Some("import x;"), "import x, y;");
    assert_eq!(values(&changes), vec!["import x", ", y", ";"]);
    assert!(changes[0].is_unchanged());
    assert!(changes[1].added);
    assert!(changes[2].is_unchanged());
}

#[test]
fn removals_are_reported_then_dropped() {
    let raw = diff_words("a b", "a");
    assert!(raw.iter().any(|c| c.removed && c.value == " b"));

    let changes = diff_content(Some("a b"), "a");
    assert_eq!(values(&changes), vec!["a"]);
    assert!(changes.iter().all(|c| !c.removed));
}

#[test]
fn replacement_reports_removed_before_added() {
    let raw = diff_words("f(value)", "f(counter)");
    assert_eq!(values(&raw), vec!["f(", "value", "counter", ")"]);
    assert!(raw[1].removed);
    assert!(raw[2].added);
}

#[test]
fn unchanged_spans_around_a_removal_stay_separate() {
    let changes = diff_content(Some("[value, setValue]"), "[counter, setCounter]");
    assert_eq!(
        values(&changes),
        vec!["[", "counter", ", ", "setCounter", "]"]
    );
}

#[test]
fn non_removed_values_reproduce_current() {
    let pairs = [
        ("", "abc"),
        ("abc", ""),
        ("a b c", "c b a"),
        (
            "import { useState } from 'react';\nconst [] = useState();",
            "\nimport { useState, useRef } from 'react';\n\n  const [v] = useState(0);\n",
        ),
    ];
    for (prev, cur) in pairs {
        let changes = diff_content(Some(prev), cur);
        let rebuilt: String = changes.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(rebuilt, cur, "prev={prev:?}");
    }
}

#[test]
fn identical_texts_are_fully_unchanged() {
    let changes = diff_content(Some("same text"), "same text");
    assert_eq!(values(&changes), vec!["same text"]);
    assert!(changes[0].is_unchanged());
}
