use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ILIAD: &str = "<TEI>\n<teiHeader><fileDesc><titleStmt>\n\
    <title type=\"main\">Iliad 1924</title>\n\
    <author><persName>Homer</persName></author>\n\
    </titleStmt></fileDesc></teiHeader>\n\
    <text><body>\n\
    <p>Sing of <persName>Achilles</persName> son of <persName>Peleus</persName>,\n\
    and of <persName>Aga&#xAD;\n<lb/>memnon</persName> and <persName>Achil-les</persName>.</p>\n\
    </body></text>\n</TEI>\n";

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_corpus() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "homer.iliad.xml", ILIAD)?;
    create_test_file(
        &dir,
        "nested/thucydides.history.xml",
        "<title type=\"main\">History 1910</title><text><persName>Pericles</persName></text>",
    )?;
    create_test_file(&dir, "notes.txt", "<persName>Loose</persName>")?;
    create_test_file(&dir, ".hidden.xml", "<persName>Hidden</persName>")?;

    Ok(dir)
}
