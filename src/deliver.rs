use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::record::JobRecord;

pub const MARKDOWN_MIME: &str = "text/markdown";

/// A rendered document ready to hand to a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl Document {
    pub fn markdown(filename: String, content: String) -> Self {
        Document {
            filename,
            content,
            mime_type: MARKDOWN_MIME,
        }
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone)]
pub struct Saved {
    pub record: JobRecord,
    pub filename: String,
    /// Where the delivery put the bytes, for display.
    pub location: String,
}

/// Turns a document into something the user can open.
pub trait Delivery {
    fn deliver(&self, doc: &Document) -> io::Result<String>;
}

/// Tells the user how a save went.
pub trait Notifier {
    fn success(&self, saved: &Saved);
    fn failure(&self, message: &str);
}

// ── File delivery ──

pub struct FileDelivery {
    dir: PathBuf,
    overwrite: bool,
}

impl FileDelivery {
    pub fn new(dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        FileDelivery {
            dir: dir.into(),
            overwrite,
        }
    }

    /// `name.md`, or `name (1).md`, `name (2).md`, … when taken and not overwriting.
    fn target_path(&self, filename: &str) -> PathBuf {
        let first = self.dir.join(filename);
        if self.overwrite || !first.exists() {
            return first;
        }
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{}", ext)),
            None => (filename, String::new()),
        };
        (1..)
            .map(|n| self.dir.join(format!("{} ({}){}", stem, n, ext)))
            .find(|p| !p.exists())
            .unwrap_or(first)
    }
}

impl Delivery for FileDelivery {
    fn deliver(&self, doc: &Document) -> io::Result<String> {
        fs::create_dir_all(&self.dir)?;
        let target = self.target_path(&doc.filename);

        PendingFile::write(&self.dir, &doc.filename, doc.content.as_bytes())?.persist(&target)?;

        info!("Saved {} ({} bytes, {})", target.display(), doc.content.len(), doc.mime_type);
        Ok(target.display().to_string())
    }
}

/// Hidden `.part` file that becomes the real file on `persist`.
/// Dropped without persisting, it removes itself.
struct PendingFile {
    path: PathBuf,
}

impl PendingFile {
    /// Writes and syncs `bytes` to the `.part` file; the handle is closed on return.
    fn write(dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<Self> {
        let pending = PendingFile {
            path: dir.join(format!(".{}.part", filename)),
        };
        let mut file = File::create(&pending.path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(pending)
    }

    fn persist(mut self, target: &Path) -> io::Result<()> {
        fs::rename(&self.path, target)?;
        // Renamed away; nothing left for Drop to clean up.
        self.path = PathBuf::new();
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.path.as_os_str().is_empty() {
            debug!("Discarding partial file {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}

// ── Stdout delivery ──

pub struct StdoutDelivery;

impl Delivery for StdoutDelivery {
    fn deliver(&self, doc: &Document) -> io::Result<String> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(doc.content.as_bytes())?;
        out.flush()?;
        Ok("<stdout>".to_string())
    }
}

// ── Console notifier ──

pub struct ConsoleNotifier;

pub fn success_message(saved: &Saved) -> String {
    format!(
        "Job saved!\n\nCompany: {}\nRole: {}\n\nFile: {}\nSaved to: {}",
        saved.record.company, saved.record.title, saved.filename, saved.location
    )
}

impl Notifier for ConsoleNotifier {
    fn success(&self, saved: &Saved) {
        eprintln!("{}", success_message(saved));
    }

    fn failure(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, body: &str) -> Document {
        Document::markdown(name.to_string(), body.to_string())
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_file_and_leaves_no_part() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("staging/manual-saves");
        let delivery = FileDelivery::new(&dir, false);

        let location = delivery.deliver(&doc("Acme-Engineer.md", "# Engineer\n")).unwrap();

        assert!(location.ends_with("Acme-Engineer.md"));
        assert_eq!(fs::read_to_string(dir.join("Acme-Engineer.md")).unwrap(), "# Engineer\n");
        assert_eq!(listing(&dir), vec!["Acme-Engineer.md"]);
    }

    #[test]
    fn repeat_saves_get_numbered() {
        let tmp = tempfile::tempdir().unwrap();
        let delivery = FileDelivery::new(tmp.path(), false);

        delivery.deliver(&doc("Acme-Engineer.md", "one")).unwrap();
        delivery.deliver(&doc("Acme-Engineer.md", "two")).unwrap();
        delivery.deliver(&doc("Acme-Engineer.md", "three")).unwrap();

        assert_eq!(
            listing(tmp.path()),
            vec!["Acme-Engineer (1).md", "Acme-Engineer (2).md", "Acme-Engineer.md"]
        );
        assert_eq!(fs::read_to_string(tmp.path().join("Acme-Engineer (2).md")).unwrap(), "three");
    }

    #[test]
    fn overwrite_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let delivery = FileDelivery::new(tmp.path(), true);

        delivery.deliver(&doc("-.md", "old")).unwrap();
        delivery.deliver(&doc("-.md", "new")).unwrap();

        assert_eq!(listing(tmp.path()), vec!["-.md"]);
        assert_eq!(fs::read_to_string(tmp.path().join("-.md")).unwrap(), "new");
    }

    #[test]
    fn dropped_pending_file_is_removed() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let _pending = PendingFile::write(tmp.path(), "Acme-Engineer.md", b"half a doc").unwrap();
            assert_eq!(
                fs::read_to_string(tmp.path().join(".Acme-Engineer.md.part")).unwrap(),
                "half a doc"
            );
            assert!(tmp.path().join(".Acme-Engineer.md.part").exists());
        }
        assert!(listing(tmp.path()).is_empty());
    }

    #[test]
    fn failed_rename_cleans_up() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no/such/dir/out.md");
        let pending = PendingFile::write(tmp.path(), "out.md", b"body").unwrap();
        assert!(pending.persist(&missing).is_err());
        assert!(listing(tmp.path()).is_empty());
    }

    #[test]
    fn unwritable_dir_leaves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent");
        assert!(PendingFile::write(&missing, "out.md", b"body").is_err());
        assert!(listing(tmp.path()).is_empty());
    }

    #[test]
    fn mime_is_markdown() {
        assert_eq!(doc("a.md", "").mime_type, "text/markdown");
    }
}
