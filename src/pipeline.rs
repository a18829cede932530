use std::io::{self, Read};
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use tracing::{info, warn};

use crate::deliver::{Delivery, Document, Notifier, Saved};
use crate::error::SaveError;
use crate::filename::sanitize;
use crate::parser::page::Page;
use crate::parser::build_record;
use crate::render::render;

/// Where the page snapshot comes from.
#[derive(Debug, Clone)]
pub enum PageSource {
    File(PathBuf),
    Stdin,
    #[cfg(test)]
    Inline(String),
}

impl PageSource {
    fn read(&self) -> Result<String, SaveError> {
        let fault = |e: io::Error| SaveError::ExtractionFault(e.to_string());
        match self {
            PageSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| SaveError::ExtractionFault(format!("{}: {}", path.display(), e))),
            PageSource::Stdin => {
                let mut html = String::new();
                io::stdin().read_to_string(&mut html).map_err(fault)?;
                Ok(html)
            }
            #[cfg(test)]
            PageSource::Inline(html) => Ok(html.clone()),
        }
    }
}

pub struct Pipeline<'a> {
    delivery: &'a dyn Delivery,
    notifier: &'a dyn Notifier,
}

impl<'a> Pipeline<'a> {
    pub fn new(delivery: &'a dyn Delivery, notifier: &'a dyn Notifier) -> Self {
        Pipeline { delivery, notifier }
    }

    pub fn run(&self, url: &str, source: &PageSource) -> Result<Saved, SaveError> {
        self.run_at(url, source, Local::now().fixed_offset())
    }

    /// One save. Every failure is reported to the notifier exactly once.
    pub fn run_at(
        &self,
        url: &str,
        source: &PageSource,
        captured_at: DateTime<FixedOffset>,
    ) -> Result<Saved, SaveError> {
        match self.save(url, source, captured_at) {
            Ok(saved) => {
                self.notifier.success(&saved);
                Ok(saved)
            }
            Err(e) => {
                warn!("Save failed for {}: {}", url, e);
                self.notifier.failure(&e.user_message());
                Err(e)
            }
        }
    }

    fn save(
        &self,
        url: &str,
        source: &PageSource,
        captured_at: DateTime<FixedOffset>,
    ) -> Result<Saved, SaveError> {
        // The snapshot is only read once the address is known to be supported.
        let record = build_record(
            url,
            || source.read().map(|html| Page::parse(&html)),
            captured_at,
        )?;

        let filename = sanitize(&record.company, &record.title);
        let doc = Document::markdown(filename.clone(), render(&record));
        let location = self
            .delivery
            .deliver(&doc)
            .map_err(|e| SaveError::Delivery(e.to_string()))?;

        info!("Saved {} - {} as {}", record.company, record.title, filename);
        Ok(Saved {
            record,
            filename,
            location,
        })
    }
}
