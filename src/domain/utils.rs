//! Argument validation shared by the joke tools

use crate::{domain::catalog::Category, errors::AppError};

pub const MIN_JOKE_COUNT: i64 = 1;
pub const MAX_JOKE_COUNT: i64 = 10;

pub fn normalize_category(category: &str) -> Result<Category, AppError> {
    Category::from_id(category).ok_or_else(|| {
        AppError::invalid_argument("invalid_category", format!("Unknown category: {category}"))
    })
}

pub fn normalize_joke_count(count: i64) -> Result<usize, AppError> {
    if !(MIN_JOKE_COUNT..=MAX_JOKE_COUNT).contains(&count) {
        return Err(AppError::invalid_argument(
            "invalid_count",
            format!("Count must be between {MIN_JOKE_COUNT} and {MAX_JOKE_COUNT}"),
        ));
    }

    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::{normalize_category, normalize_joke_count};
    use crate::domain::catalog::Category;

    #[test]
    fn accepts_exact_category_ids() {
        assert_eq!(
            normalize_category("programming").expect("valid category"),
            Category::Programming
        );
        assert_eq!(normalize_category("dad").expect("valid category"), Category::Dad);
        assert_eq!(
            normalize_category("knock_knock").expect("valid category"),
            Category::KnockKnock
        );
    }

    #[test]
    fn rejects_category_with_other_case_or_whitespace() {
        for category in ["DAD", " dad ", "Programming", "Knock_Knock"] {
            let error = normalize_category(category).expect_err("expected invalid category");
            assert_eq!(error.code(), "invalid_category");
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let error = normalize_category("unknown").expect_err("expected invalid category");
        assert!(error.to_string().contains("invalid argument"));
        assert!(error.to_string().contains("Unknown category: unknown"));
        assert_eq!(error.code(), "invalid_category");
    }

    #[test]
    fn rejects_empty_category() {
        let error = normalize_category("  ").expect_err("expected invalid category");
        assert_eq!(error.code(), "invalid_category");
    }

    #[test]
    fn accepts_counts_in_range() {
        for count in 1..=10 {
            assert_eq!(
                normalize_joke_count(count).expect("valid count"),
                count as usize
            );
        }
    }

    #[test]
    fn rejects_counts_out_of_range() {
        for count in [i64::MIN, -1, 0, 11, 100] {
            let error = normalize_joke_count(count).expect_err("expected invalid count");
            assert_eq!(
                error.to_string(),
                "invalid argument: Count must be between 1 and 10"
            );
            assert_eq!(error.code(), "invalid_count");
        }
    }
}
