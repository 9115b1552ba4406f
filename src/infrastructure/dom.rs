use web_sys::Element;

use crate::domain::{
    errors::{AppError, AppResult},
    layout::{AnchorService, Rect, RowMetric},
};

/// Attribute carried by every rendered order row.
pub const ROW_INDEX_ATTR: &str = "data-row-index";

/// Copies `getBoundingClientRect()` into a domain rectangle.
pub fn rect_of(element: &Element) -> Rect {
    let dom_rect = element.get_bounding_client_rect();
    Rect::new(dom_rect.top(), dom_rect.left(), dom_rect.width(), dom_rect.height())
}

/// CSS selector matching the row rendered for `index`.
pub fn row_selector(index: usize) -> String {
    format!("[{}=\"{}\"]", ROW_INDEX_ATTR, index)
}

/// Finds the row element tagged with `index` below `container`.
pub fn find_row(container: &Element, index: usize) -> AppResult<Option<Element>> {
    let selector = row_selector(index);
    container
        .query_selector(&selector)
        .map_err(|e| AppError::Measurement(format!("query '{selector}' failed: {e:?}")))
}

/// Measures `row_count` rows relative to `container`.
///
/// Rows that are not in the DOM produce `None`; an absent container produces
/// an empty list.
pub fn measure_order_rows(
    container: Option<&Element>,
    row_count: usize,
) -> AppResult<Vec<Option<RowMetric>>> {
    let Some(container) = container else {
        return Ok(Vec::new());
    };

    let rows = (0..row_count)
        .map(|index| find_row(container, index).map(|row| row.as_ref().map(rect_of)))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(AnchorService::measure_rows(Some(&rect_of(container)), &rows))
}
