// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const HOMER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<TEI xmlns=\"http://www.tei-c.org/ns/1.0\">\n\
<teiHeader>\n\
  <fileDesc><titleStmt>\n\
    <title type=\"main\">The Iliad 1924</title>\n\
    <author><persName>Homer</persName></author>\n\
  </titleStmt></fileDesc>\n\
</teiHeader>\n\
<text>\n\
  <front><p>Edited by <persName>A. T. Murray</persName></p></front>\n\
  <body>\n\
    <p>Sing, goddess, the wrath of <persName>Achilles</persName>,\n\
    son of <persName>Pe&#xAD;\n<lb/>leus</persName>, and of <persName>Aga\n<lb/>memnon</persName>.</p>\n\
    <p><persName><hi rend=\"italic\">Achil-les</hi></persName> went to <placeName>Troy</placeName>.</p>\n\
  </body>\n\
</text>\n\
</TEI>\n";

pub const THUCYDIDES: &str = "<TEI>\n\
<teiHeader><title type=\"main\">History of the War 1910</title></teiHeader>\n\
<text><body>\n\
  <p><persName>Pericles</persName> spoke to the <persName>Athenians</persName>.</p>\n\
  <p><persName>P&#233;ricl&#232;s</persName> and <persName>ATHENIANS</persName></p>\n\
</body></text>\n\
</TEI>\n";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn setup_test_corpus() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "homer.iliad.xml", HOMER)?;
    create_test_file(
        temp_dir.path(),
        "greek/thucydides.history.xml",
        THUCYDIDES,
    )?;

    Ok(temp_dir)
}
