use super::Strategy;
use crate::parser::field::{joined_tags, FieldRule};
use crate::parser::page::Page;
use crate::record::*;

// Locator lists cover the current and the older unified top card layouts.
const TITLE: FieldRule = FieldRule::raw(
    "title",
    &[
        ".job-details-jobs-unified-top-card__job-title",
        ".jobs-unified-top-card__job-title",
        "h1",
    ],
    UNKNOWN_TITLE,
);

const COMPANY: FieldRule = FieldRule::raw(
    "company",
    &[
        ".job-details-jobs-unified-top-card__company-name",
        ".jobs-unified-top-card__company-name",
        ".jobs-unified-top-card__subtitle-primary-grouping a",
    ],
    UNKNOWN_COMPANY,
);

const LOCATION: FieldRule = FieldRule::raw(
    "location",
    &[
        ".job-details-jobs-unified-top-card__bullet",
        ".jobs-unified-top-card__bullet",
    ],
    UNKNOWN_LOCATION,
);

const DESCRIPTION: FieldRule = FieldRule::rendered(
    "description",
    &[
        ".jobs-description__content",
        ".jobs-box__html-content",
        ".description__text",
    ],
    NO_DESCRIPTION,
);

const INSIGHTS: &str = ".jobs-unified-top-card__job-insight span";

pub struct LinkedIn;

impl Strategy for LinkedIn {
    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    fn extract(&self, page: &Page, _url: &str) -> ExtractedFields {
        ExtractedFields {
            title: TITLE.extract(page),
            company: COMPANY.extract(page),
            location: LOCATION.extract(page),
            description: DESCRIPTION.extract(page),
            metadata: joined_tags(page, INSIGHTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.linkedin.com/jobs/view/3912345678/";

    fn fixture(name: &str) -> Page {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        Page::parse(&html)
    }

    #[test]
    fn current_layout() {
        let f = LinkedIn.extract(&fixture("linkedin"), URL);
        assert_eq!(f.title, "Senior Backend Engineer");
        assert_eq!(f.company, "Northwind Analytics");
        assert_eq!(f.location, "Berlin, Germany (Hybrid)");
        assert!(f.description.starts_with("About the job"));
        assert!(f.description.contains("\n\nWhat you will do\n"));
        assert!(f.description.contains("Design and operate ingestion services\nOwn on-call"));
        assert_eq!(f.metadata, "Full-time | Remote | Mid-Senior");
    }

    #[test]
    fn legacy_layout_falls_back() {
        let f = LinkedIn.extract(&fixture("linkedin_legacy"), URL);
        assert_eq!(f.title, "Data Analyst");
        assert_eq!(f.company, "Contoso Retail");
        assert_eq!(f.location, "Austin, TX");
        assert_eq!(f.description, "Help us understand our customers.\nSQL required.");
        assert_eq!(f.metadata, "");
    }

    #[test]
    fn bare_page_gets_defaults() {
        let f = LinkedIn.extract(&Page::parse("<h1>Staff Engineer</h1>"), URL);
        assert_eq!(f.title, "Staff Engineer");
        assert_eq!(f.company, UNKNOWN_COMPANY);
        assert_eq!(f.location, UNKNOWN_LOCATION);
        assert_eq!(f.description, NO_DESCRIPTION);
        assert!(f.metadata.is_empty());
    }

    #[test]
    fn blank_insights_are_skipped() {
        let html = r#"<h1>Staff Engineer</h1>
            <ul>
              <li class="jobs-unified-top-card__job-insight"><span>Full-time</span></li>
              <li class="jobs-unified-top-card__job-insight"><span> </span></li>
              <li class="jobs-unified-top-card__job-insight"><span></span></li>
              <li class="jobs-unified-top-card__job-insight"><span>Remote</span></li>
            </ul>"#;
        let f = LinkedIn.extract(&Page::parse(html), URL);
        assert_eq!(f.metadata, "Full-time | Remote");
    }
}
