use errlog_digest::aggregator::aggregate_reader;
use errlog_digest::output::{
    read_digest, to_digest, validate_path, write_digest, Report, ReportLabels, Reporter,
};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tempfile::tempdir;

const LOG: &str = "\
[t1] PHP Warning:  a
[t2] PHP Fatal error:  b
Stack trace:
#0 /x.php(3): f()
[t3] PHP Warning:  a
";

#[test]
fn test_render_full_report() {
    let aggregator = aggregate_reader(Cursor::new(LOG), "app.log").unwrap();
    let reporter = Reporter::default();
    let text = reporter.render(&reporter.build(&aggregator), None);

    let heavy = "=".repeat(80);
    let light = "-".repeat(80);
    let expected = format!(
        "{heavy}\n\
Log file analysis complete. Results:\n\
{heavy}\n\
Total errors found: 3\n\
Unique error types: 2\n\
By category: PHP Fatal error 1, PHP Warning 2\n\
\n\
{light}\n\
1 | Error type: PHP Warning\n\
Count: 2\n\
Message: a\n\
First occurrence: t1\n\
Last occurrence: t3\n\
\n\
{light}\n\
2 | Error type: PHP Fatal error\n\
Count: 1\n\
Message: b\n\
First occurrence: t2\n\
Last occurrence: t2\n\
<StackTrace>\n\
Stack trace:\n\
#0 /x.php(3): f()\n\
</StackTrace>\n\
\n",
        heavy = heavy,
        light = light
    );

    assert_eq!(text, expected);
}

#[test]
fn test_render_top_limits_blocks_not_totals() {
    let aggregator = aggregate_reader(Cursor::new(LOG), "app.log").unwrap();
    let reporter = Reporter::default();
    let text = reporter.render(&reporter.build(&aggregator), Some(1));

    assert!(text.contains("Total errors found: 3"));
    assert!(text.contains("1 | Error type: PHP Warning"));
    assert!(!text.contains("2 | Error type"));
}

#[test]
fn test_render_nothing_found_in_ukrainian() {
    let aggregator = aggregate_reader(Cursor::new("no entries here\n"), "empty.log").unwrap();
    let reporter = Reporter::new(ReportLabels::ukrainian());
    let report = reporter.build(&aggregator);

    assert!(report.is_empty());
    assert_eq!(
        reporter.render(&report, None),
        "Не знайдено жодних помилок для аналізу.\n"
    );
}

#[test]
fn test_custom_labels_change_only_their_keys() {
    let labels = ReportLabels::from_toml_str("count = \"Hits\"\n").unwrap();
    let reporter = Reporter::new(labels);
    let aggregator = aggregate_reader(Cursor::new("[t] PHP Notice:  n\n"), "n.log").unwrap();
    let text = reporter.render(&reporter.build(&aggregator), None);

    assert!(text.contains("Hits: 1"));
    assert!(text.contains("Message: n"));
}

#[test]
fn test_digest_write_and_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("digest.json");

    let aggregator = aggregate_reader(Cursor::new(LOG), "app.log").unwrap();
    let report = Reporter::default().build(&aggregator);
    let digest = to_digest("app.log", &report);
    write_digest(&digest, &path).unwrap();

    let loaded = read_digest(&path).unwrap();
    assert_eq!(loaded.source, "app.log");
    assert_eq!(loaded.total_occurrences, 3);
    assert_eq!(loaded.distinct_errors, 2);
    assert_eq!(loaded.errors.len(), 2);
    assert_eq!(loaded.errors[0].rank, 1);
    assert_eq!(loaded.errors[0].category, "PHP Warning");
    assert_eq!(loaded.errors[0].timestamps, vec!["t1", "t3"]);
    assert_eq!(loaded.errors[0].fingerprint.len(), 64);
    assert_eq!(loaded.by_category.get("PHP Fatal error"), Some(&1));
    assert!(loaded.errors[1].stack_trace.is_some());
}

#[test]
fn test_digest_of_empty_report() {
    let digest = to_digest("empty.log", &Report::NothingFound);
    assert_eq!(digest.total_occurrences, 0);
    assert_eq!(digest.distinct_errors, 0);
    assert!(digest.errors.is_empty());
    assert!(digest.by_category.is_empty());
}

#[test]
fn test_validate_path() {
    let dir = tempdir().unwrap();

    assert!(validate_path(std::path::Path::new("")).is_err());
    assert!(validate_path(dir.path()).is_err());
    assert!(validate_path(&dir.path().join("out.json")).is_ok());
}
