use sluglog::slug::{DEFAULT_NAME, MAX_SLUG_LEN, segment_or_default, slugify};

const SAMPLES: &[&str] = &[
    "Café Logger",
    "  Hello   World  ",
    "api/v2: handler!",
    "snake_case-and-kebab",
    "__Leading and trailing__",
    "Ünïcödé ñame",
    "日本語",
    "tab\tand\nnewline",
    "a - b _ c",
    "100% done",
    "",
    "!!!",
];

#[test]
fn slugify_strips_accents_and_lowercases() {
    assert_eq!(slugify("Café Logger"), "cafe_logger");
    assert_eq!(slugify("Ünïcödé ñame"), "unicode_name");
}

#[test]
fn slugify_collapses_separator_runs() {
    assert_eq!(slugify("  Hello   World  "), "hello_world");
    assert_eq!(slugify("a - b _ c"), "a_b_c");
    assert_eq!(slugify("snake_case-and-kebab"), "snake_case_and_kebab");
    assert_eq!(slugify("tab\tand\nnewline"), "tab_and_newline");
}

#[test]
fn slugify_drops_punctuation_and_path_separators() {
    assert_eq!(slugify("api/v2: handler!"), "apiv2_handler");
    assert_eq!(slugify("../../etc/passwd"), "etcpasswd");
    assert_eq!(slugify("100% done"), "100_done");
}

#[test]
fn slugify_empty_results() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify("日本語"), "");
    assert_eq!(slugify(" - _ "), "");
}

#[test]
fn slugify_is_idempotent() {
    for sample in SAMPLES {
        let once = slugify(sample);
        assert_eq!(slugify(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn slugify_output_alphabet() {
    for sample in SAMPLES {
        let slug = slugify(sample);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unexpected character in {slug:?}"
        );
    }
}

#[test]
fn segment_substitutes_default() {
    assert_eq!(segment_or_default(None), DEFAULT_NAME);
    assert_eq!(segment_or_default(Some("")), DEFAULT_NAME);
    assert_eq!(segment_or_default(Some("???")), DEFAULT_NAME);
    assert_eq!(segment_or_default(Some("Worker 1")), "worker_1");
}

#[test]
fn slugify_caps_length() {
    let slug = slugify(&"a".repeat(245));
    assert_eq!(slug.len(), MAX_SLUG_LEN);
    assert_eq!(slugify(&slug), slug);

    // A cut landing on a separator leaves no trailing underscore.
    let raw = format!("{} tail", "b".repeat(MAX_SLUG_LEN - 1));
    let slug = slugify(&raw);
    assert_eq!(slug, "b".repeat(MAX_SLUG_LEN - 1));
}

#[test]
fn capped_segment_leaves_room_for_retired_names() {
    let base = segment_or_default(Some(&"Very Long Service Name ".repeat(20)));
    let retired = format!("{base}.log.2024-05-01.99999");
    assert!(retired.len() <= 255, "{} bytes", retired.len());
}
