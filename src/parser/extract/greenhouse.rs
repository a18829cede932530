use super::{segment_after, Strategy};
use crate::parser::field::FieldRule;
use crate::parser::page::Page;
use crate::record::*;

const BOARDS_HOST: &str = "boards.greenhouse.io/";

const TITLE: FieldRule = FieldRule::raw("title", &[".app-title", "h1.app-title"], UNKNOWN_TITLE);
const COMPANY: FieldRule = FieldRule::raw("company", &[".company-name"], UNKNOWN_COMPANY);
const LOCATION: FieldRule = FieldRule::raw("location", &[".location"], UNKNOWN_LOCATION);
const DESCRIPTION: FieldRule =
    FieldRule::rendered("description", &["#content", ".content"], NO_DESCRIPTION);

pub struct Greenhouse;

impl Strategy for Greenhouse {
    fn platform(&self) -> Platform {
        Platform::Greenhouse
    }

    fn extract(&self, page: &Page, url: &str) -> ExtractedFields {
        // On-page name first, then the board slug from the address.
        let company = COMPANY
            .find(page)
            .or_else(|| segment_after(url, BOARDS_HOST))
            .unwrap_or_else(|| COMPANY.default.to_string());

        ExtractedFields {
            title: TITLE.extract(page),
            company,
            location: LOCATION.extract(page),
            description: DESCRIPTION.extract(page),
            metadata: String::new(),
        }
    }
}
