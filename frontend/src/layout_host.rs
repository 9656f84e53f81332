//! Seam between the drag controller and the page it resizes.

use shared::Region;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("no document available")]
    NoDocument,
    #[error("element '#{0}' not found")]
    MissingElement(Region),
    #[error("element '#{0}' is not an HTML element")]
    NotHtmlElement(Region),
    #[error("'#{region}' rejected {property}: {reason}")]
    StyleRejected {
        region: Region,
        property: &'static str,
        reason: String,
    },
}

/// Live measurements and style mutation of the named page regions.
///
/// Implementations must not cache sizes: every call reflects the current layout.
pub trait LayoutHost {
    fn offset_width(&self, region: Region) -> Result<i32, LayoutError>;

    fn offset_height(&self, region: Region) -> Result<i32, LayoutError>;

    fn set_style(&self, region: Region, property: &'static str, value: &str) -> Result<(), LayoutError>;

    /// Left/top of the region's border box in viewport coordinates.
    fn client_origin(&self, region: Region) -> Result<(i32, i32), LayoutError>;
}

/// The real page: regions are looked up by id on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayoutHost;

impl DomLayoutHost {
    fn element(&self, region: Region) -> Result<HtmlElement, LayoutError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(LayoutError::NoDocument)?;
        document
            .get_element_by_id(region.id())
            .ok_or(LayoutError::MissingElement(region))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| LayoutError::NotHtmlElement(region))
    }
}

impl LayoutHost for DomLayoutHost {
    fn offset_width(&self, region: Region) -> Result<i32, LayoutError> {
        Ok(self.element(region)?.offset_width())
    }

    fn offset_height(&self, region: Region) -> Result<i32, LayoutError> {
        Ok(self.element(region)?.offset_height())
    }

    fn set_style(&self, region: Region, property: &'static str, value: &str) -> Result<(), LayoutError> {
        self.element(region)?
            .style()
            .set_property(property, value)
            .map_err(|error| LayoutError::StyleRejected {
                region,
                property,
                reason: format!("{:?}", error),
            })
    }

    fn client_origin(&self, region: Region) -> Result<(i32, i32), LayoutError> {
        let rect = self.element(region)?.get_bounding_client_rect();
        Ok((rect.left().round() as i32, rect.top().round() as i32))
    }
}
