use std::fs;

use tempfile::TempDir;

use itembook::{
    export::{ExportError, ExportResult, ExportSink, build_rows, csv::CsvFileSink},
    item::ItemRecord,
    persist::memory::MemoryMedium,
    store::{ItemStore, kv::KvItemStore},
    ui::app::{App, AppError},
};

fn record(id: u64, name: &str, desc: &str) -> ItemRecord {
    ItemRecord {
        id,
        name: name.to_string(),
        emp_code: format!("E{id}"),
        taluk_name: "North".to_string(),
        description: desc.to_string(),
        created_at_ms: 1_700_000_000_000,
    }
}

#[test]
fn rows_are_numbered_in_store_order() {
    let items = vec![record(7, "Gita", ""), record(3, "Chandra", "")];
    let rows = build_rows(&items);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][1], "7");
    assert_eq!(rows[1][0], "2");
    assert_eq!(rows[1][1], "3");
    // Formatted creation timestamp, same text the table shows.
    assert_eq!(rows[0][6], items[0].created_at_label());
}

#[test]
fn artifact_has_header_and_one_row_per_record() {
    let tmp = TempDir::new().expect("tmp");
    let mut sink = CsvFileSink::new(tmp.path());

    let items = vec![record(1, "Alice", ""), record(2, "Bob", "desk")];
    let rows = sink.export(&items).expect("export");
    assert_eq!(rows, 2);

    let text = fs::read_to_string(sink.path()).expect("read");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("S.No,ID,Name,Emp Code,Taluk Name,Description,Date Created")
    );
    assert!(lines.next().expect("row").starts_with("1,1,Alice,E1,North,,"));
    assert!(lines.next().expect("row").starts_with("2,2,Bob,E2,North,desk,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn artifact_is_overwritten_not_appended() {
    let tmp = TempDir::new().expect("tmp");
    let mut sink = CsvFileSink::new(tmp.path());

    sink.export(&[record(1, "Alice", ""), record(2, "Bob", ""), record(3, "Chandra", "")])
        .expect("first export");
    sink.export(&[record(4, "Devi", "")]).expect("second export");

    let text = fs::read_to_string(sink.path()).expect("read");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn auto_export_runs_after_persist() {
    let tmp = TempDir::new().expect("tmp");
    let sink = CsvFileSink::new(tmp.path());
    let path = sink.path().to_path_buf();

    let mut store = KvItemStore::with_sink(MemoryMedium::new(), Box::new(sink));
    store.persist(&[record(1, "Alice", "")]).expect("persist");

    let text = fs::read_to_string(&path).expect("artifact exists");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn auto_export_skips_an_empty_list() {
    let tmp = TempDir::new().expect("tmp");
    let sink = CsvFileSink::new(tmp.path());
    let path = sink.path().to_path_buf();

    let mut store = KvItemStore::with_sink(MemoryMedium::new(), Box::new(sink));
    store.persist(&[]).expect("persist");
    assert!(!path.exists());
}

struct FailingSink;

impl ExportSink for FailingSink {
    fn export(&mut self, _items: &[ItemRecord]) -> ExportResult<usize> {
        Err(ExportError::Unavailable)
    }
}

#[test]
fn persist_succeeds_when_the_sink_fails() {
    let mut store = KvItemStore::with_sink(MemoryMedium::new(), Box::new(FailingSink));
    store
        .persist(&[record(1, "Alice", "")])
        .expect("persist survives sink failure");
    assert_eq!(store.list_all().len(), 1);
}

#[test]
fn on_demand_export_without_sink_is_unavailable() {
    let mut app = App::new(KvItemStore::new(MemoryMedium::new()));
    let err = app.export().expect_err("unavailable");
    assert!(matches!(err, AppError::Export(ExportError::Unavailable)));
}

#[test]
fn on_demand_export_with_no_records_reports_nothing() {
    let tmp = TempDir::new().expect("tmp");
    let sink = CsvFileSink::new(tmp.path());

    let mut app = App::new(KvItemStore::with_sink(MemoryMedium::new(), Box::new(sink)));
    let err = app.export().expect_err("nothing to export");
    assert!(matches!(err, AppError::Export(ExportError::Nothing)));
}

#[test]
fn on_demand_export_writes_the_artifact() {
    let tmp = TempDir::new().expect("tmp");
    let sink = CsvFileSink::new(tmp.path());
    let path = sink.path().to_path_buf();

    let mut store = KvItemStore::with_sink(MemoryMedium::new(), Box::new(sink));
    // Stage records without triggering the auto-export path.
    store.persist(&[]).expect("persist");
    let mut app = App::new(store);

    app.submit(&itembook::ui::form::FormInput {
        name: "Alice".to_string(),
        emp_code: "E1".to_string(),
        taluk_name: "T1".to_string(),
        description: String::new(),
    })
    .expect("submit");

    let notice = app.export().expect("export");
    assert_eq!(notice.to_string(), "Exported 1 items.");
    assert!(path.exists());
}
