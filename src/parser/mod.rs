pub mod detect;
pub mod extract;
pub mod field;
pub mod page;

use chrono::{DateTime, FixedOffset};

use crate::error::SaveError;
use crate::record::JobRecord;
use page::Page;

/// Detect → load → extract → stamp. The page is only loaded for a supported
/// address; detection failure yields no record.
pub fn build_record(
    url: &str,
    load_page: impl FnOnce() -> Result<Page, SaveError>,
    captured_at: DateTime<FixedOffset>,
) -> Result<JobRecord, SaveError> {
    let strategy = extract::strategy_for(detect::detect(url)?);
    let page = load_page()?;
    let fields = strategy.extract(&page, url);
    Ok(JobRecord::new(url, strategy.platform(), fields, captured_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Platform, UNKNOWN_COMPANY};
    use chrono::TimeZone;

    fn noon() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn linkedin_without_company() {
        let page = Page::parse("<h1>Staff Engineer</h1>");
        let url = "https://www.linkedin.com/jobs/view/42/";
        let r = build_record(url, || Ok(page), noon()).unwrap();
        assert_eq!(r.platform, Platform::LinkedIn);
        assert_eq!(r.title, "Staff Engineer");
        assert_eq!(r.company, UNKNOWN_COMPANY);
        assert_eq!(r.url, url);
        assert_eq!(r.captured_at, noon());
    }

    #[test]
    fn greenhouse_company_from_address() {
        let page = Page::parse(r#"<h1 class="app-title">Engineer</h1>"#);
        let url = "https://boards.greenhouse.io/acme/jobs/123";
        let r = build_record(url, || Ok(page), noon()).unwrap();
        assert_eq!(r.platform, Platform::Greenhouse);
        assert_eq!(r.company, "acme");
    }

    #[test]
    fn unsupported_address_builds_nothing() {
        let mut loaded = false;
        let err = build_record(
            "https://example.com/careers/42",
            || {
                loaded = true;
                Ok(Page::parse("<h1>Anything</h1>"))
            },
            noon(),
        )
        .unwrap_err();
        assert!(matches!(err, SaveError::UnsupportedPlatform { .. }));
        assert!(!loaded);
    }

    #[test]
    fn load_fault_propagates() {
        let err = build_record(
            "https://jobs.lever.co/globex/1",
            || Err(SaveError::ExtractionFault("truncated snapshot".into())),
            noon(),
        )
        .unwrap_err();
        assert!(matches!(err, SaveError::ExtractionFault(_)));
    }

    #[test]
    fn platform_comes_from_matched_strategy() {
        let r = build_record("https://jobs.lever.co/globex/1", || Ok(Page::parse("")), noon())
            .unwrap();
        assert_eq!(r.platform, Platform::Lever);
        assert_eq!(r.company, "globex");
    }

    #[test]
    fn all_fields_present() {
        for url in [
            "https://www.linkedin.com/jobs/view/1",
            "https://boards.greenhouse.io/",
            "https://jobs.lever.co/",
        ] {
            let r = build_record(url, || Ok(Page::parse("")), noon()).unwrap();
            for value in [&r.title, &r.company, &r.location, &r.description] {
                assert!(!value.is_empty(), "{}", url);
            }
        }
    }
}
