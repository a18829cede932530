use super::{segment_after, Strategy};
use crate::parser::field::FieldRule;
use crate::parser::page::Page;
use crate::record::*;

const JOBS_HOST: &str = "jobs.lever.co/";

const TITLE: FieldRule = FieldRule::raw("title", &[".posting-headline h2"], UNKNOWN_TITLE);
const LOCATION: FieldRule = FieldRule::raw(
    "location",
    &[".posting-categories .location", ".workplaceTypes"],
    UNKNOWN_LOCATION,
);
const DESCRIPTION: FieldRule = FieldRule::rendered("description", &[".content"], NO_DESCRIPTION);

pub struct Lever;

impl Strategy for Lever {
    fn platform(&self) -> Platform {
        Platform::Lever
    }

    fn extract(&self, page: &Page, url: &str) -> ExtractedFields {
        // Lever pages carry no company element; the address is the only source.
        let company =
            segment_after(url, JOBS_HOST).unwrap_or_else(|| UNKNOWN_COMPANY.to_string());

        ExtractedFields {
            title: TITLE.extract(page),
            company,
            location: LOCATION.extract(page),
            description: DESCRIPTION.extract(page),
            metadata: String::new(),
        }
    }
}
