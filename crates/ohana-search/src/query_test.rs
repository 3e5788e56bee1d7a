use super::*;
use crate::policy::RequiredFilterPolicy;

fn params() -> SearchParams {
    SearchParams::default()
}

fn validate_default(params: &SearchParams) -> Result<SearchQuery, ValidationError> {
    validate(params, &SearchSettings::default())
}

// -----------------------------------------------------------------------
// radius
// -----------------------------------------------------------------------

#[test]
fn radius_within_bounds_is_accepted() {
    for raw in ["0.1", "1", "5", "25.5", "50", " 50 "] {
        let q = validate_default(&SearchParams {
            radius: Some(raw.to_string()),
            ..params()
        })
        .unwrap_or_else(|e| panic!("{raw} should be accepted: {e}"));
        assert!(q.radius.is_some());
    }
}

#[test]
fn radius_outside_bounds_or_non_numeric_is_rejected() {
    for raw in ["0.05", "0", "-1", "50.01", "ads", "NaN", "inf", "1,5"] {
        let err = validate_default(&SearchParams {
            location: Some("94403".to_string()),
            radius: Some(raw.to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(
            err.description(),
            "Radius must be a Float between 0.1 and 50.",
            "radius {raw}"
        );
    }
}

#[test]
fn blank_radius_is_absent() {
    let q = validate_default(&SearchParams {
        radius: Some("   ".to_string()),
        ..params()
    })
    .unwrap();
    assert!(q.radius.is_none());
}

// -----------------------------------------------------------------------
// lat_lng
// -----------------------------------------------------------------------

#[test]
fn lat_lng_pair_is_parsed() {
    let q = validate_default(&SearchParams {
        lat_lng: Some("37.583939, -122.3715745".to_string()),
        ..params()
    })
    .unwrap();
    let coords = q.lat_lng.expect("coordinates");
    assert!((coords.latitude - 37.583_939).abs() < 1e-9);
    assert!((coords.longitude + 122.371_574_5).abs() < 1e-9);
}

#[test]
fn malformed_lat_lng_is_rejected() {
    for raw in [
        "37.6856578-122.4138119",
        "Apple,Pear",
        "37.5,",
        "37.5,-122.3,1",
        "95.0,-122.3",
        "37.5,-190",
    ] {
        let err = validate_default(&SearchParams {
            lat_lng: Some(raw.to_string()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(
            err.description(),
            "lat_lng must be a comma-delimited lat,long pair of floats.",
            "lat_lng {raw}"
        );
    }
}

#[test]
fn lat_lng_takes_precedence_over_location_text() {
    let q = validate_default(&SearchParams {
        location: Some("Burlingame".to_string()),
        lat_lng: Some("37.58,-122.34".to_string()),
        ..params()
    })
    .unwrap();
    assert!(q.lat_lng.is_some());
    assert!(q.location_text.is_none());
}

#[test]
fn location_text_whitespace_is_collapsed() {
    let q = validate_default(&SearchParams {
        location: Some("  1236   Broadway,\tBurlingame ".to_string()),
        ..params()
    })
    .unwrap();
    assert_eq!(q.location_text.as_deref(), Some("1236 Broadway, Burlingame"));
}

// -----------------------------------------------------------------------
// page / per_page
// -----------------------------------------------------------------------

#[test]
fn page_defaults_when_absent() {
    let q = validate_default(&params()).unwrap();
    assert_eq!(q.page, 1);
    assert_eq!(q.per_page, 30);
}

#[test]
fn non_positive_page_values_clamp_to_one() {
    let q = validate_default(&SearchParams {
        page: Some("0".to_string()),
        per_page: Some("-5".to_string()),
        ..params()
    })
    .unwrap();
    assert_eq!(q.page, 1);
    assert_eq!(q.per_page, 1);
}

#[test]
fn per_page_clamps_to_configured_max() {
    let settings = SearchSettings {
        max_per_page: 50,
        ..SearchSettings::default()
    };
    let q = validate(
        &SearchParams {
            per_page: Some("500".to_string()),
            ..params()
        },
        &settings,
    )
    .unwrap();
    assert_eq!(q.per_page, 50);
}

#[test]
fn unparseable_page_values_are_rejected() {
    let err = validate_default(&SearchParams {
        page: Some("two".to_string()),
        ..params()
    })
    .unwrap_err();
    assert_eq!(err, ValidationError::InvalidPage { field: "page" });

    let err = validate_default(&SearchParams {
        per_page: Some("1.5".to_string()),
        ..params()
    })
    .unwrap_err();
    assert_eq!(err.description(), "per_page must be an Integer.");
}

// -----------------------------------------------------------------------
// sort and free-text filters
// -----------------------------------------------------------------------

#[test]
fn sort_modes_parse_case_insensitively() {
    assert_eq!(SortMode::parse("Distance"), Some(SortMode::Distance));
    assert_eq!(SortMode::parse(" relevance "), Some(SortMode::Relevance));
    assert_eq!(SortMode::parse("name"), None);
}

#[test]
fn unknown_sort_is_ignored() {
    let q = validate_default(&SearchParams {
        sort: Some("name".to_string()),
        ..params()
    })
    .unwrap();
    assert!(q.sort.is_none());
}

#[test]
fn empty_query_is_accepted() {
    let q = validate_default(&params()).unwrap();
    assert!(q.keyword.is_none());
    assert!(!q.has_location());
}

#[test]
fn blank_filters_are_absent() {
    let q = validate_default(&SearchParams {
        keyword: Some("  ".to_string()),
        category: Some(String::new()),
        ..params()
    })
    .unwrap();
    assert!(q.keyword.is_none());
    assert!(q.category.is_none());
}

#[test]
fn filters_are_trimmed_but_keep_case() {
    let q = validate_default(&SearchParams {
        category: Some(" Jobs ".to_string()),
        ..params()
    })
    .unwrap();
    assert_eq!(q.category.as_deref(), Some("Jobs"));
}

#[test]
fn enabled_policy_is_applied_by_validate() {
    let settings = SearchSettings {
        required_filter: RequiredFilterPolicy::enabled(),
        ..SearchSettings::default()
    };
    let err = validate(
        &SearchParams {
            org_name: Some("Food".to_string()),
            ..params()
        },
        &settings,
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::MissingRequiredFilter);
}
