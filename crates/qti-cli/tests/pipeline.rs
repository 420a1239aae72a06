//! End-to-end tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use qti_cli::pipeline::{ConvertOptions, convert};
use qti_cli::report::write_report;
use qti_model::{MissingField, TextMode};

const QUIZ: &str = "Item ID,Title,Question,Choice A,Choice B,Choice C,Correct Choice\n\
                    Q1,Math,2+2=?,3,4,,B\n\
                    ,Blank,No id?,x,y,,A\n\
                    Q2,Geo,Capital of France?,Paris,Rome,Berlin,A\n\
                    Q3,Empty,No choices?,,,,A\n";

fn setup(contents: &str) -> (TempDir, ConvertOptions) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("quiz_questions.csv");
    fs::write(&input, contents).expect("write csv");
    let options = ConvertOptions {
        input,
        output_dir: dir.path().join("output_qti"),
        ..ConvertOptions::default()
    };
    (dir, options)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Relative paths of every file under `root`, sorted.
fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path.strip_prefix(root).expect("under root").to_path_buf());
            }
        }
    }
    files.sort();
    files
}

#[test]
fn converts_valid_rows_and_skips_invalid_ones() {
    let (_dir, options) = setup(QUIZ);
    let result = convert(&options).expect("convert");

    assert_eq!(result.rows_read, 4);
    let ids: Vec<&str> = result
        .items
        .iter()
        .map(|item| item.entry.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["Q1", "Q2"]);
    assert_eq!(result.items[0].entry.href, "Items/Item_Q1/Q1.xml");
    assert_eq!(result.items[0].row, 1);
    assert_eq!(result.items[1].row, 3);
    assert!(!result.has_errors());

    assert_eq!(result.skipped.len(), 2);
    assert_eq!(result.skipped[0].row, 2);
    assert_eq!(result.skipped[0].missing, vec![MissingField::ItemId]);
    assert_eq!(result.skipped[0].record.get("Title"), "Blank");
    assert_eq!(result.skipped[1].missing, vec![MissingField::Choices]);

    let q1 = read(&options.output_dir.join("Items/Item_Q1/Q1.xml"));
    assert!(q1.contains(r#"identifier="Q1" title="Math""#));
    assert!(q1.contains("<value>B</value>"));
    assert!(q1.contains(r#"<simpleChoice identifier="A">3</simpleChoice>"#));
    assert!(q1.contains(r#"<simpleChoice identifier="B">4</simpleChoice>"#));
    assert_eq!(q1.matches("<simpleChoice ").count(), 2);

    assert_eq!(
        list_files(&options.output_dir),
        vec![
            PathBuf::from("Items/Item_Q1/Q1.xml"),
            PathBuf::from("Items/Item_Q2/Q2.xml"),
            PathBuf::from("imsmanifest.xml"),
        ]
    );
    assert!(!options.output_dir.join("Items/Item_").exists());
}

#[test]
fn manifest_lists_written_items_in_input_order() {
    let (_dir, options) = setup(QUIZ);
    let result = convert(&options).expect("convert");

    let manifest_path = result.manifest.expect("manifest written");
    assert_eq!(manifest_path, options.output_dir.join("imsmanifest.xml"));
    let manifest = read(&manifest_path);
    assert_eq!(manifest.matches("<resource ").count(), 2);
    let q1 = manifest
        .find(r#"identifier="Q1" href="Items/Item_Q1/Q1.xml""#)
        .expect("Q1 resource");
    let q2 = manifest
        .find(r#"identifier="Q2" href="Items/Item_Q2/Q2.xml""#)
        .expect("Q2 resource");
    assert!(q1 < q2);
    assert!(manifest.contains(r#"<file href="Items/Item_Q2/Q2.xml" />"#));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let (_dir, options) = setup(QUIZ);
    convert(&options).expect("first run");
    let files = list_files(&options.output_dir);
    let first: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(options.output_dir.join(f)).expect("read"))
        .collect();

    convert(&options).expect("second run");
    assert_eq!(list_files(&options.output_dir), files);
    let second: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(options.output_dir.join(f)).expect("read"))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn choices_follow_header_order() {
    let (_dir, options) = setup(
        "Item ID,Question,ChoiceC,ChoiceA,ChoiceB,Correct Choice\n\
         Q1,Order?,c,a,b,A\n",
    );
    convert(&options).expect("convert");
    let item = read(&options.output_dir.join("Items/Item_Q1/Q1.xml"));
    let positions: Vec<usize> = ["identifier=\"C\"", "identifier=\"A\"", "identifier=\"B\""]
        .iter()
        .map(|needle| item.find(needle).expect("choice present"))
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);
}

#[test]
fn missing_input_fails_before_any_output() {
    let dir = TempDir::new().unwrap();
    let options = ConvertOptions {
        input: dir.path().join("absent.csv"),
        output_dir: dir.path().join("output_qti"),
        ..ConvertOptions::default()
    };
    let err = convert(&options).expect_err("missing input");
    assert!(format!("{err:#}").contains("absent.csv"));
    assert!(!options.output_dir.exists());
}

#[test]
fn item_write_failure_excludes_item_from_manifest() {
    let (_dir, options) = setup(QUIZ);
    let items_dir = options.output_dir.join("Items");
    fs::create_dir_all(&items_dir).expect("create items dir");
    fs::write(items_dir.join("Item_Q1"), "blocks the item directory").expect("write blocker");

    let result = convert(&options).expect("run completes");
    assert!(result.has_errors());
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].identifier, "Q1");
    assert_eq!(result.failed[0].row, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].entry.identifier, "Q2");

    let manifest = read(&options.output_dir.join("imsmanifest.xml"));
    assert!(!manifest.contains(r#"identifier="Q1""#));
    assert!(manifest.contains(r#"identifier="Q2""#));
}

#[test]
fn dry_run_writes_nothing() {
    let (_dir, options) = setup(QUIZ);
    let options = ConvertOptions {
        dry_run: true,
        ..options
    };
    let result = convert(&options).expect("dry run");
    assert_eq!(result.items.len(), 2);
    assert!(result.manifest.is_none());
    assert!(!options.output_dir.exists());
}

#[test]
fn raw_text_mode_embeds_markup_verbatim() {
    let (_dir, options) = setup(
        "Item ID,Question,Choice A,Correct Choice\n\
         Q1,Is 1 < 2 & 3?,yes,A\n",
    );
    let raw = ConvertOptions {
        text_mode: TextMode::Raw,
        ..options.clone()
    };
    convert(&raw).expect("raw run");
    let item = read(&options.output_dir.join("Items/Item_Q1/Q1.xml"));
    assert!(item.contains("<p>Is 1 < 2 & 3?</p>"));

    convert(&options).expect("escaped run");
    let item = read(&options.output_dir.join("Items/Item_Q1/Q1.xml"));
    assert!(item.contains("<p>Is 1 &lt; 2 &amp; 3?</p>"));
}

#[test]
fn report_serializes_run() {
    let (dir, options) = setup(QUIZ);
    let result = convert(&options).expect("convert");
    let report_path = dir.path().join("report.json");
    write_report(&result, &report_path).expect("write report");

    let report: serde_json::Value =
        serde_json::from_str(&read(&report_path)).expect("valid json");
    assert_eq!(report["rows_read"], 4);
    assert_eq!(report["items"][1]["identifier"], "Q2");
    assert_eq!(report["items"][1]["row"], 3);
    assert_eq!(report["skipped"][0]["missing"][0], "item_id");
    assert_eq!(report["skipped"][0]["record"]["Title"], "Blank");
}

#[test]
fn manifest_write_failure_fails_the_run() {
    let (_dir, options) = setup(QUIZ);
    fs::create_dir_all(options.output_dir.join("imsmanifest.xml"))
        .expect("occupy manifest path with a directory");

    let err = convert(&options).expect_err("manifest cannot be written");
    assert!(format!("{err:#}").contains("imsmanifest.xml"));
}

#[test]
fn empty_input_writes_empty_manifest() {
    let (_dir, options) = setup("");
    let result = convert(&options).expect("empty input converts");

    assert_eq!(result.rows_read, 0);
    assert!(result.items.is_empty());
    assert!(result.skipped.is_empty());
    let manifest = read(&options.output_dir.join("imsmanifest.xml"));
    assert!(manifest.ends_with("  <resources>\n  </resources>\n</manifest>\n"));
    assert_eq!(
        list_files(&options.output_dir),
        vec![PathBuf::from("imsmanifest.xml")]
    );
}

#[test]
fn header_only_input_writes_empty_manifest() {
    let (_dir, options) = setup("Item ID,Question,Choice A,Correct Choice\n");
    let result = convert(&options).expect("header-only input converts");
    assert_eq!(result.rows_read, 0);
    let manifest = read(&options.output_dir.join("imsmanifest.xml"));
    assert_eq!(manifest.matches("<resource ").count(), 0);
}
