use std::convert::Infallible;

use pretty_assertions::assert_eq;
use wordfreq_core::{
    build_report, count_lines, write_report, FrequencyTable, ReportLine, TokenPolicy,
};

fn ok_lines(lines: &[&str]) -> Vec<Result<String, Infallible>> {
    lines.iter().map(|line| Ok(line.to_string())).collect()
}

fn render(lines: &[ReportLine]) -> String {
    let mut out = Vec::new();
    write_report(lines, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn counter_initializes_new_tokens_to_one() {
    let mut table = FrequencyTable::new();
    table.record("a".into());
    assert_eq!(table.count("a"), 1);
    table.record("a".into());
    assert_eq!(table.count("a"), 2);
    assert_eq!(table.count("b"), 0);
    assert_eq!(table.len(), 1);
    assert_eq!(table.total_tokens(), 2);
}

#[test]
fn counting_ignores_line_order() {
    let forward = ok_lines(&["one two two", "three three three", "", "one"]);
    let mut backward = forward.clone();
    backward.reverse();

    let a = count_lines(forward, &TokenPolicy::Alpha).unwrap();
    let b = count_lines(backward, &TokenPolicy::Alpha).unwrap();
    assert_eq!(a, b);
}

#[test]
fn count_lines_stops_at_first_error() {
    let lines: Vec<Result<String, &str>> = vec![Ok("a b".into()), Err("boom"), Ok("c".into())];
    assert_eq!(count_lines(lines, &TokenPolicy::Alpha), Err("boom"));
}

#[test]
fn alpha_example_report() {
    let table = count_lines(
        ok_lines(&["The quick brown fox. The QUICK fox!"]),
        &TokenPolicy::Alpha,
    )
    .unwrap();
    assert_eq!(
        render(&build_report(table)),
        "   2 fox\n   2 quick\n   2 the\n   1 brown\n"
    );
}

#[test]
fn hyphen_aware_example_report() {
    let table =
        count_lines(ok_lines(&["well-known well known"]), &TokenPolicy::AlnumHyphen).unwrap();
    assert_eq!(render(&build_report(table)), "   2 known\n   2 well\n");
}

#[test]
fn empty_table_renders_nothing() {
    let report = build_report(FrequencyTable::new());
    assert!(report.is_empty());
    assert_eq!(render(&report), "");
}

#[test]
fn report_is_ordered_and_covers_every_token() {
    let text = [
        "it was the best of times it was the worst of times",
        "it was the age of wisdom it was the age of foolishness",
        "zebra apple mango apple zebra kiwi",
    ];
    let table = count_lines(ok_lines(&text), &TokenPolicy::Alpha).unwrap();
    let total = table.total_tokens();
    let distinct = table.len();
    let report = build_report(table);

    assert_eq!(report.len(), distinct);
    assert_eq!(report.iter().map(|l| l.count).sum::<u64>(), total);

    for pair in report.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        assert!(first.count >= second.count, "{first} before {second}");
        if first.count == second.count {
            assert!(first.token < second.token, "{first} before {second}");
        }
    }

    let mut tokens: Vec<&str> = report.iter().map(|l| l.token.as_str()).collect();
    tokens.sort_unstable();
    tokens.dedup();
    assert_eq!(tokens.len(), report.len());
}

#[test]
fn frequency_table_collects_from_tokens() {
    let table: FrequencyTable = ["x", "y", "x"].into_iter().map(String::from).collect();
    assert_eq!(
        build_report(table),
        vec![ReportLine::new(2, "x"), ReportLine::new(1, "y")]
    );
}

#[test]
fn frequency_table_extends_and_iterates() {
    let mut table = FrequencyTable::new();
    assert!(table.is_empty());

    table.extend(["go", "stop", "go"].into_iter().map(String::from));
    assert!(!table.is_empty());
    assert_eq!(table.total_tokens(), 3);

    let mut entries: Vec<(&str, u64)> = table.iter().collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![("go", 2), ("stop", 1)]);
}
