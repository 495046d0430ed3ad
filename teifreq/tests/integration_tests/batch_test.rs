// tests/integration_tests/batch_test.rs
use super::common::{create_test_file, setup_test_corpus};
use anyhow::Result;
use teifreq::{Settings, analyze_batch, write_outcome};

fn settings(directory: &std::path::Path) -> Settings {
    Settings {
        files: Vec::new(),
        directory: Some(directory.to_path_buf()),
        tag: String::from("persName"),
        exclude: vec![String::from("teiHeader"), String::from("front")],
        metadata: true,
        corpus: false,
        output: None,
    }
}

#[test]
fn test_batch_with_metadata_rows() -> Result<()> {
    let temp_dir = setup_test_corpus()?;
    let outcome = analyze_batch(&settings(temp_dir.path()));
    assert!(outcome.failures.is_empty());

    let mut out = Vec::new();
    let rows = write_outcome(&mut out, &outcome, false)?;
    let text = String::from_utf8(out)?;

    assert_eq!(rows, text.lines().count());
    assert!(text.contains("homer\tiliad\t1924\tachil-les\tachil-les|achilles\t2\n"));
    assert!(text.contains("thucydides\thistory\t1910\tathenians\tathenians\t2\n"));
    Ok(())
}

#[test]
fn test_bad_document_does_not_stop_batch() -> Result<()> {
    let temp_dir = setup_test_corpus()?;
    create_test_file(temp_dir.path(), "README", "<persName>Nobody</persName>")?;

    let outcome = analyze_batch(&settings(temp_dir.path()));
    assert_eq!(outcome.reports.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures.iter().all(|f| f.path.ends_with("README")));
    Ok(())
}

#[test]
fn test_corpus_mode_merges_tables() -> Result<()> {
    let temp_dir = setup_test_corpus()?;
    let mut settings = settings(temp_dir.path());
    settings.metadata = false;
    settings.corpus = true;

    let outcome = analyze_batch(&settings);
    let mut out = Vec::new();
    write_outcome(&mut out, &outcome, true)?;
    let text = String::from_utf8(out)?;

    assert_eq!(text.lines().count(), 6);
    assert!(text.lines().all(|line| line.split('\t').count() == 3));
    assert!(text.contains("achil-les\tachil-les|achilles\t2\n"));
    Ok(())
}
