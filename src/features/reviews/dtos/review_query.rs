use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::AppError;

/// Columns a review listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Owner,
    Title,
    ReviewId,
    Category,
    ReviewImgUrl,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Owner,
        SortColumn::Title,
        SortColumn::ReviewId,
        SortColumn::Category,
        SortColumn::ReviewImgUrl,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    /// Name accepted in the `sort_by` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortColumn::Owner => "owner",
            SortColumn::Title => "title",
            SortColumn::ReviewId => "review_id",
            SortColumn::Category => "category",
            SortColumn::ReviewImgUrl => "review_img_url",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// Expression the listing query orders by
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::Owner => "reviews.owner",
            SortColumn::Title => "reviews.title",
            SortColumn::ReviewId => "reviews.review_id",
            SortColumn::Category => "reviews.category",
            SortColumn::ReviewImgUrl => "reviews.review_img_url",
            SortColumn::CreatedAt => "reviews.created_at",
            SortColumn::Votes => "reviews.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_param() == s)
            .ok_or(AppError::UnknownSortColumn)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(AppError::InvalidOrderDirection)
        }
    }
}

/// Raw query string of `GET /api/reviews`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReviewQueryParams {
    /// Only return reviews in this category (exact slug)
    pub category: Option<String>,

    /// Column to sort by (default: created_at)
    pub sort_by: Option<String>,

    /// ASC or DESC, case-insensitive (default: DESC)
    pub order_by: Option<String>,
}

/// Validated listing filter. Holding one means every parameter is in the
/// accepted vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListFilter {
    pub category: Option<String>,
    pub sort_by: SortColumn,
    pub order_by: SortDirection,
}

impl TryFrom<ReviewQueryParams> for ReviewListFilter {
    type Error = AppError;

    fn try_from(params: ReviewQueryParams) -> Result<Self, Self::Error> {
        let sort_by = params
            .sort_by
            .as_deref()
            .map(SortColumn::from_str)
            .transpose()?
            .unwrap_or_default();

        let order_by = params
            .order_by
            .as_deref()
            .map(SortDirection::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            category: params.category,
            sort_by,
            order_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sort_by: Option<&str>, order_by: Option<&str>) -> ReviewQueryParams {
        ReviewQueryParams {
            category: None,
            sort_by: sort_by.map(String::from),
            order_by: order_by.map(String::from),
        }
    }

    #[test]
    fn test_every_whitelisted_column_parses() {
        for name in [
            "owner",
            "title",
            "review_id",
            "category",
            "review_img_url",
            "created_at",
            "votes",
            "comment_count",
        ] {
            let column: SortColumn = name.parse().unwrap();
            assert_eq!(column.as_param(), name);
        }
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        for name in ["banana", "", "VOTES", "review_body", "votes; DROP TABLE reviews"] {
            assert!(matches!(
                name.parse::<SortColumn>(),
                Err(AppError::UnknownSortColumn)
            ));
        }
    }

    #[test]
    fn test_direction_is_case_insensitive() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("Desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!(matches!(
            "banana".parse::<SortDirection>(),
            Err(AppError::InvalidOrderDirection)
        ));
        assert!(matches!(
            "".parse::<SortDirection>(),
            Err(AppError::InvalidOrderDirection)
        ));
    }

    #[test]
    fn test_defaults_to_newest_first() {
        let filter = ReviewListFilter::try_from(ReviewQueryParams::default()).unwrap();
        assert_eq!(filter.sort_by, SortColumn::CreatedAt);
        assert_eq!(filter.order_by, SortDirection::Desc);
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_filter_keeps_category_verbatim() {
        let filter = ReviewListFilter::try_from(ReviewQueryParams {
            category: Some("children's games".to_string()),
            ..ReviewQueryParams::default()
        })
        .unwrap();
        assert_eq!(filter.category.as_deref(), Some("children's games"));
    }

    #[test]
    fn test_bad_sort_column_reported_before_bad_direction() {
        let result = ReviewListFilter::try_from(params(Some("banana"), Some("sideways")));
        assert!(matches!(result, Err(AppError::UnknownSortColumn)));

        let result = ReviewListFilter::try_from(params(Some("votes"), Some("sideways")));
        assert!(matches!(result, Err(AppError::InvalidOrderDirection)));
    }

    #[test]
    fn test_sort_sql_comes_from_closed_set() {
        for column in SortColumn::ALL {
            let sql = column.as_sql();
            assert!(sql == "comment_count" || sql.starts_with("reviews."));
        }
    }
}
