use crate::error::SiteError;
use crate::highlight::highlight;
use crate::utils::dom;

pub const SOURCE_CODE_ID: &str = "source-code";

pub fn init() -> Result<(), SiteError> {
    if let Some(block) = dom::by_id(SOURCE_CODE_ID)? {
        let source = block.text_content().unwrap_or_default();
        block.set_inner_html(&highlight(&source));
    }
    Ok(())
}
