//! End-to-end pipeline cases.

use rstest::rstest;
use sift_core::{
    CleanError, LineTable, NormalizationMethod, Pipeline, Report, RunOptions, StageLabel,
    StopwordSet,
};

const SOCIAL: &str =
    "Hello! This is a TEST text with URLs http://example.com and emails test@example.com";

fn stage_tokens(text: &str, options: RunOptions, label: StageLabel) -> Vec<String> {
    Pipeline::english()
        .run(text, options)
        .get(label)
        .and_then(|r| r.as_tokens())
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

fn stage_text(text: &str, label: StageLabel) -> String {
    Pipeline::english()
        .run(text, RunOptions::filter_only())
        .get(label)
        .and_then(|r| r.as_text())
        .unwrap_or_default()
        .to_owned()
}

#[rstest]
#[case(SOCIAL, &["hello", "test", "text", "urls", "emails"])]
#[case("this is a test text with some words", &["test", "text", "words"])]
#[case("I can't believe it's already 2024!!!", &["cannot", "believe", "already"])]
#[case("Follow @rustlang and #opensource for news", &["follow", "news"])]
#[case("", &[])]
fn filtered_tokens(#[case] input: &str, #[case] expected: &[&str]) {
    let tokens = stage_tokens(input, RunOptions::filter_only(), StageLabel::FilteredTokens);
    assert_eq!(tokens, expected);
}

#[rstest]
#[case(RunOptions::lemmatize(), &["hello", "test", "text", "url", "email"])]
#[case(RunOptions::stem(), &["hello", "test", "text", "url", "email"])]
fn normalized_tokens(#[case] options: RunOptions, #[case] expected: &[&str]) {
    let tokens = stage_tokens(SOCIAL, options, StageLabel::NormalizedTokens);
    assert_eq!(tokens, expected);
}

#[rstest]
#[case("Visit https://rust-lang.org NOW", "visit now")]
#[case("Mail me: someone@mail.example.org", "mail me:")]
#[case("  spaced\t\tout\n\ntext  ", "spaced out text")]
#[case("#tag @user", "")]
fn basic_stage(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(stage_text(input, StageLabel::Basic), expected);
}

#[rstest]
#[case("we won't stop", "we will not stop")]
#[case("they're sure we've seen it", "they are sure we have seen it")]
#[case("wait... what?!", "wait what")]
#[case("price (approx) 10$", "price approx 10")]
#[case("what's that's", "what is that is")]
fn intermediate_stage(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(stage_text(input, StageLabel::Intermediate), expected);
}

#[rstest]
#[case("lemmatization", Some(NormalizationMethod::Lemmatization))]
#[case("stemming", Some(NormalizationMethod::Stemming))]
#[case("Stemming", None)]
#[case("stem", None)]
#[case("lemma", None)]
#[case(" lemmatization ", None)]
#[case("porter", None)]
#[case("", None)]
fn method_selection(#[case] method: &str, #[case] expected: Option<NormalizationMethod>) {
    let result = Pipeline::english().run_named(SOCIAL, true, method);
    match expected {
        Some(m) => {
            let history = result.unwrap();
            let record = history.get(StageLabel::NormalizedTokens).unwrap();
            assert_eq!(record.method, Some(m));
        }
        None => assert!(matches!(result, Err(CleanError::InvalidMethod(_)))),
    }
}

#[test]
fn social_sample_basic_stage() {
    let basic = stage_text(SOCIAL, StageLabel::Basic);
    assert!(!basic.contains("http://"));
    assert!(!basic.contains('@'));
    for word in ["is", "a", "with", "and"] {
        assert!(basic.split_whitespace().any(|w| w == word));
    }
}

#[test]
fn custom_stopwords_change_filtering() {
    let pipeline = Pipeline::new(StopwordSet::parse("hello\ntest\n"));
    let history = pipeline.run(SOCIAL, RunOptions::filter_only());
    let tokens = history.final_tokens().and_then(|r| r.as_tokens()).unwrap();
    assert_eq!(tokens, ["this", "text", "with", "urls", "and", "emails"]);
}

#[test]
fn line_table_feeds_pipeline() {
    let doc = "First line with cats.\nok\n\nSecond line with dogs!\n";
    let table = LineTable::from_raw(doc);
    assert_eq!(table.len(), 2);

    let pipeline = Pipeline::english();
    let lemmas: Vec<Vec<String>> = table
        .iter()
        .map(|row| {
            pipeline
                .run(&row.text, RunOptions::lemmatize())
                .final_tokens()
                .and_then(|r| r.as_tokens())
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(lemmas, [vec!["first", "line", "cat"], vec!["second", "line", "dog"]]);
}

#[test]
fn report_over_full_run() {
    let history = Pipeline::english().run(SOCIAL, RunOptions::stem());
    let report = Report::new(&history).to_string();
    assert!(report.contains("MORPHOLOGICAL NORMALIZATION (STEMMING)"));
    assert!(report.contains("hello test text url email"));
}

#[test]
fn shared_across_threads() {
    let pipeline = std::sync::Arc::new(Pipeline::english());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = pipeline.clone();
            std::thread::spawn(move || pipeline.run(SOCIAL, RunOptions::lemmatize()))
        })
        .collect();
    let expected = pipeline.run(SOCIAL, RunOptions::lemmatize());
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
