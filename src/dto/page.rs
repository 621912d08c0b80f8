//! Pagination types
//!
//! A page request carries a zero-based page index, a page size and a single
//! sort key with direction. A page result carries the content plus the
//! total-count metadata the client needs to render paging controls.

use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Sortable truck columns. Client sort keys are matched against this closed
/// set so raw input never reaches an ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Model,
    Status,
    Details,
}

impl SortField {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "model" => Ok(SortField::Model),
            "status" => Ok(SortField::Status),
            "details" => Ok(SortField::Details),
            _ => Err(AppError::BadRequest(format!("Unknown sort field: {}", raw))),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Model => "model",
            SortField::Status => "status",
            SortField::Details => "details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(AppError::BadRequest(format!(
                "Unknown sort direction: {}",
                raw
            ))),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A request for one bounded, sorted slice of a collection.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 2,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl PageRequest {
    pub fn new(
        page: i64,
        size: i64,
        sort_field: SortField,
        sort_direction: SortDirection,
    ) -> Result<Self, AppError> {
        if page < 0 {
            return Err(AppError::BadRequest(format!(
                "Page index must not be negative: {}",
                page
            )));
        }
        if size < 1 {
            return Err(AppError::BadRequest(format!(
                "Page size must be at least 1: {}",
                size
            )));
        }

        Ok(Self {
            page,
            size,
            sort_field,
            sort_direction,
        })
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

/// Query parameters accepted by the paginated listing endpoint.
/// `sort` carries "field,direction", e.g. `id,asc`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PaginationParams {
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let defaults = PageRequest::default();

        let (sort_field, sort_direction) = match self.sort {
            Some(raw) => parse_sort(&raw)?,
            None => (defaults.sort_field, defaults.sort_direction),
        };

        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.size.unwrap_or(defaults.size),
            sort_field,
            sort_direction,
        )
    }
}

fn parse_sort(raw: &str) -> Result<(SortField, SortDirection), AppError> {
    let mut parts = raw.splitn(2, ',');
    let field = SortField::parse(parts.next().unwrap_or("").trim())?;
    let direction = match parts.next() {
        Some(dir) => SortDirection::parse(dir.trim())?,
        None => SortDirection::Asc,
    };

    Ok((field, direction))
}

/// One page of results plus total-count metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.size - 1) / request.size
        };

        Self {
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
        }
    }

    /// Map the page content while preserving the paging metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_two_by_id_ascending() {
        let request = PaginationParams {
            page: None,
            size: None,
            sort: None,
        }
        .into_page_request()
        .unwrap();

        assert_eq!(request.page, 0);
        assert_eq!(request.size, 2);
        assert_eq!(request.sort_field, SortField::Id);
        assert_eq!(request.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_all_parameters_override_independently() {
        let request = PaginationParams {
            page: Some(3),
            size: Some(25),
            sort: Some("model,desc".to_string()),
        }
        .into_page_request()
        .unwrap();

        assert_eq!(request.page, 3);
        assert_eq!(request.size, 25);
        assert_eq!(request.sort_field, SortField::Model);
        assert_eq!(request.sort_direction, SortDirection::Desc);
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn test_sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse("ASC").unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::parse("Desc").unwrap(), SortDirection::Desc);
        assert!(SortDirection::parse("sideways").is_err());
    }

    #[test]
    fn test_sort_without_direction_defaults_to_ascending() {
        let (field, direction) = parse_sort("status").unwrap();
        assert_eq!(field, SortField::Status);
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let err = parse_sort("license_plate,asc").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_negative_page_and_zero_size_are_rejected() {
        assert!(PageRequest::new(-1, 2, SortField::Id, SortDirection::Asc).is_err());
        assert!(PageRequest::new(0, 0, SortField::Id, SortDirection::Asc).is_err());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::default();

        let page = Page::new(vec![1, 2], 5, &request);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 0);
        assert_eq!(page.size, 2);

        let empty: Page<i64> = Page::new(vec![], 0, &request);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let request = PageRequest::default();
        let page = Page::new(vec![1, 2], 5, &request).map(|n| n.to_string());

        assert_eq!(page.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_serializes_spring_style_keys() {
        let request = PageRequest::default();
        let page = Page::new(vec![1, 2], 5, &request);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["content"], serde_json::json!([1, 2]));
    }
}
