//! Validation rules for rating submissions and listing queries.
//!
//! All validators collect every violated rule rather than stopping at the
//! first, so a caller can fix a whole request in one round trip. Error
//! messages are ordered by field: identifiers first, then score, review
//! text, and service details.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest accepted score.
pub const MIN_SCORE: i64 = 1;

/// Highest accepted score.
pub const MAX_SCORE: i64 = 5;

/// Maximum review length in characters.
pub const MAX_REVIEW_TEXT_LENGTH: usize = 500;

/// Page used when the query omits one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the query omits one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Sort field used when the query omits one.
pub const DEFAULT_SORT_FIELD: SortField = SortField::CreatedAt;

/// Sort order used when the query omits one.
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Desc;

/// Accepted values for the `sort_by` query parameter.
pub const VALID_SORT_FIELDS: &[&str] = &["score", "created_at", "updated_at"];

/// Accepted values for the `sort_order` query parameter.
pub const VALID_SORT_ORDERS: &[&str] = &["asc", "desc"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Optional details about the service behind a rating.
///
/// Arriving as a typed record means a non-object `service_details` value is
/// rejected at the deserialization boundary; only the per-field rules below
/// need runtime checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub service_name: Option<String>,
    pub service_date: Option<String>,
    pub service_price: Option<f64>,
}

/// Columns a rating listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Score,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse a `sort_by` query value. Matching is exact: field names are
    /// lowercase identifiers, not free text.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "score" => Some(Self::Score),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// Column name for ORDER BY clauses. Values come from this fixed
    /// allow-list, never from caller input.
    pub fn as_column(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Direction of a rating listing sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `sort_order` query value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// SQL keyword for ORDER BY clauses.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw, string-typed listing parameters as they arrive on the wire.
///
/// Everything stays a string until [`validate_query_params`] runs, so one
/// pass can report every malformed parameter instead of failing at
/// extraction on the first.
#[derive(Debug, Default, Deserialize)]
pub struct RatingQueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub min_score: Option<String>,
    pub max_score: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// A validated listing query with defaults applied.
///
/// `min_score` and `max_score` are independent bounds. A range that matches
/// nothing (min above max) is not an error; it yields an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingQuery {
    pub page: i64,
    pub limit: i64,
    pub min_score: Option<i16>,
    pub max_score: Option<i16>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for RatingQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
            min_score: None,
            max_score: None,
            sort_field: DEFAULT_SORT_FIELD,
            sort_order: DEFAULT_SORT_ORDER,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a rating submission.
///
/// Returns the score narrowed to its storage width once every rule passes,
/// or the full list of violations.
pub fn validate_submit(
    user_uid: &str,
    barber_uid: &str,
    score: Option<i64>,
    review_text: Option<&str>,
    service_details: Option<&ServiceDetails>,
) -> Result<i16, Vec<String>> {
    let mut errors = Vec::new();

    if user_uid.trim().is_empty() {
        errors.push("User ID is required".to_string());
    }
    if barber_uid.trim().is_empty() {
        errors.push("Barber ID is required".to_string());
    }

    let valid_score = match score {
        Some(s) if (MIN_SCORE..=MAX_SCORE).contains(&s) => Some(s as i16),
        _ => {
            errors.push(format!(
                "Score must be an integer between {MIN_SCORE} and {MAX_SCORE}"
            ));
            None
        }
    };

    check_review_text(review_text, &mut errors);
    check_service_details(service_details, &mut errors);

    match valid_score {
        Some(s) if errors.is_empty() => Ok(s),
        _ => Err(errors),
    }
}

/// Validate a partial rating update.
///
/// At least one updatable field must be present; present fields obey the
/// same rules as on submission.
pub fn validate_update(
    score: Option<i64>,
    review_text: Option<&str>,
    service_details: Option<&ServiceDetails>,
) -> Result<(), Vec<String>> {
    if score.is_none() && review_text.is_none() && service_details.is_none() {
        return Err(vec![
            "At least one field (score, review_text, or service_details) must be provided for update"
                .to_string(),
        ]);
    }

    let mut errors = Vec::new();

    if let Some(s) = score {
        if !(MIN_SCORE..=MAX_SCORE).contains(&s) {
            errors.push(format!(
                "Score must be an integer between {MIN_SCORE} and {MAX_SCORE}"
            ));
        }
    }

    check_review_text(review_text, &mut errors);
    check_service_details(service_details, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate raw listing parameters and resolve them into a [`RatingQuery`].
///
/// Absent parameters take their defaults; present ones must parse and fall
/// within range. Errors for every bad parameter are reported together, in
/// field order.
pub fn validate_query_params(params: &RatingQueryParams) -> Result<RatingQuery, Vec<String>> {
    let mut errors = Vec::new();

    let page = match &params.page {
        Some(raw) => match raw.parse::<i64>() {
            Ok(p) if p >= 1 => p,
            _ => {
                errors.push("Page must be a positive integer".to_string());
                DEFAULT_PAGE
            }
        },
        None => DEFAULT_PAGE,
    };

    let limit = match &params.limit {
        Some(raw) => match raw.parse::<i64>() {
            Ok(l) if (1..=MAX_PAGE_LIMIT).contains(&l) => l,
            _ => {
                errors.push(format!(
                    "Limit must be a positive integer between 1 and {MAX_PAGE_LIMIT}"
                ));
                DEFAULT_PAGE_LIMIT
            }
        },
        None => DEFAULT_PAGE_LIMIT,
    };

    let min_score = check_score_bound(&params.min_score, "Minimum", &mut errors);
    let max_score = check_score_bound(&params.max_score, "Maximum", &mut errors);

    let sort_field = match &params.sort_by {
        Some(raw) => match SortField::parse(raw) {
            Some(field) => field,
            None => {
                errors.push(format!(
                    "Sort field must be one of: {}",
                    VALID_SORT_FIELDS.join(", ")
                ));
                DEFAULT_SORT_FIELD
            }
        },
        None => DEFAULT_SORT_FIELD,
    };

    let sort_order = match &params.sort_order {
        Some(raw) => match SortOrder::parse(raw) {
            Some(order) => order,
            None => {
                errors.push("Sort order must be either \"asc\" or \"desc\"".to_string());
                DEFAULT_SORT_ORDER
            }
        },
        None => DEFAULT_SORT_ORDER,
    };

    if errors.is_empty() {
        Ok(RatingQuery {
            page,
            limit,
            min_score,
            max_score,
            sort_field,
            sort_order,
        })
    } else {
        Err(errors)
    }
}

/// Trim surrounding whitespace from a submitted review. An empty result
/// collapses to `None` so blank reviews are stored as NULL.
pub fn normalize_review_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts an RFC 3339 date-time or a plain `YYYY-MM-DD` date.
pub fn is_valid_service_date(raw: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(raw).is_ok()
        || chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

fn check_review_text(review_text: Option<&str>, errors: &mut Vec<String>) {
    if let Some(text) = review_text {
        if text.chars().count() > MAX_REVIEW_TEXT_LENGTH {
            errors.push(format!(
                "Review text cannot exceed {MAX_REVIEW_TEXT_LENGTH} characters"
            ));
        }
    }
}

fn check_service_details(details: Option<&ServiceDetails>, errors: &mut Vec<String>) {
    let Some(details) = details else { return };

    if let Some(date) = details.service_date.as_deref() {
        if !is_valid_service_date(date) {
            errors.push("Service date must be a valid date".to_string());
        }
    }
    // JSON numbers are never NaN, so a plain comparison is enough.
    if let Some(price) = details.service_price {
        if price < 0.0 {
            errors.push("Service price cannot be negative".to_string());
        }
    }
}

fn check_score_bound(raw: &Option<String>, bound: &str, errors: &mut Vec<String>) -> Option<i16> {
    let raw = raw.as_ref()?;
    match raw.parse::<i64>() {
        Ok(s) if (MIN_SCORE..=MAX_SCORE).contains(&s) => Some(s as i16),
        _ => {
            errors.push(format!(
                "{bound} score must be an integer between {MIN_SCORE} and {MAX_SCORE}"
            ));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
