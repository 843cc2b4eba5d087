//! Turns user search parameters into a request for the repository search endpoint

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{
    clamp_count, QueryParameters, SearchMode, SearchRequest, TOP_STARS_COUNT, TOP_STARS_MIN_STARS,
};

/// How far back category searches look for newly created repositories
pub const CREATED_WINDOW_DAYS: i64 = 30;

pub const SORT_FIELD: &str = "stars";
pub const SORT_ORDER: &str = "desc";

/// Date-only cutoff `CREATED_WINDOW_DAYS` before `now`
pub fn cutoff_date(now: DateTime<Utc>) -> NaiveDate {
    (now - Duration::days(CREATED_WINDOW_DAYS)).date_naive()
}

/// Build the outbound search request for `params` as of `now`
///
/// Category mode searches `<category> created:>YYYY-MM-DD`, appending a
/// `stars:>N` clause only when a positive minimum is set. Top-stars mode
/// ignores category and count, always requests 10 results and falls back to
/// a 10000-star floor when no explicit minimum is given.
pub fn build_query(params: &QueryParameters, now: DateTime<Utc>) -> SearchRequest {
    let (query, per_page) = match params.search_mode {
        SearchMode::Category => {
            let mut query = format!(
                "{} created:>{}",
                params.category,
                cutoff_date(now).format("%Y-%m-%d")
            );
            if params.min_stars > 0 {
                query.push_str(&format!(" stars:>{}", params.min_stars));
            }
            (query, clamp_count(params.count))
        }
        SearchMode::TopStars => {
            let min_stars = if params.min_stars > 0 {
                params.min_stars
            } else {
                TOP_STARS_MIN_STARS
            };
            (format!("stars:>{}", min_stars), TOP_STARS_COUNT)
        }
    };

    SearchRequest {
        query,
        sort: SORT_FIELD,
        order: SORT_ORDER,
        per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn category_query_with_min_stars() {
        let params = QueryParameters::category("rust", 5, 1000);
        let request = build_query(&params, march_15());

        assert_eq!(request.query, "rust created:>2024-02-14 stars:>1000");
        assert_eq!(request.sort, "stars");
        assert_eq!(request.order, "desc");
        assert_eq!(request.per_page, 5);
    }

    #[test]
    fn category_query_omits_stars_clause_at_zero() {
        let params = QueryParameters::category("rust", 10, 0);
        let request = build_query(&params, march_15());

        assert_eq!(request.query, "rust created:>2024-02-14");
        assert!(!request.query.contains("stars:"));
        assert_eq!(request.per_page, 10);
    }

    #[test]
    fn stars_clause_present_for_any_positive_minimum() {
        for min_stars in [1, 42, 999_999] {
            let params = QueryParameters::category("ml", 5, min_stars);
            let request = build_query(&params, march_15());
            assert!(request.query.contains(&format!(" stars:>{}", min_stars)));
        }
    }

    #[test]
    fn cutoff_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(
            cutoff_date(now),
            NaiveDate::from_ymd_opt(2023, 12, 11).unwrap()
        );
    }

    #[test]
    fn category_count_out_of_range_is_clamped() {
        let mut params = QueryParameters::default();
        params.count = 200;
        assert_eq!(build_query(&params, march_15()).per_page, 25);
    }

    #[test]
    fn top_stars_ignores_category_and_count() {
        let params = QueryParameters {
            category: "rust".to_string(),
            count: 25,
            search_mode: SearchMode::TopStars,
            min_stars: 0,
        };
        let request = build_query(&params, march_15());

        assert_eq!(request.query, "stars:>10000");
        assert_eq!(request.per_page, 10);
        assert_eq!(request.sort, "stars");
        assert_eq!(request.order, "desc");
    }

    #[test]
    fn top_stars_uses_explicit_minimum() {
        let params = QueryParameters {
            min_stars: 50_000,
            ..QueryParameters::top_stars()
        };
        assert_eq!(build_query(&params, march_15()).query, "stars:>50000");
    }

    #[test]
    fn forced_top_stars_parameters() {
        let request = build_query(&QueryParameters::top_stars(), march_15());
        assert_eq!(request.per_page, 10);
        assert_eq!(request.query, "stars:>10000");
    }
}
