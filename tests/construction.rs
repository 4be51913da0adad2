use datekit::{date, CalendarDate, InvalidDateError};

#[test]
fn compact_numeric_forms() {
    assert_eq!(
        date(Some(2012.into()), None, None).unwrap(),
        CalendarDate::new(2012, 1, 1).unwrap()
    );
    assert_eq!(
        date(Some(201207.into()), None, None).unwrap(),
        CalendarDate::new(2012, 7, 1).unwrap()
    );
    assert_eq!(
        date(Some(20120719.into()), None, None).unwrap(),
        CalendarDate::new(2012, 7, 19).unwrap()
    );
}

#[test]
fn digit_strings_match_numbers() {
    for (text, number) in [("2012", 2012), ("201207", 201207), ("20120719", 20120719)] {
        assert_eq!(
            date(Some(text.into()), None, None).unwrap(),
            date(Some(number.into()), None, None).unwrap(),
            "mismatch for {text:?}"
        );
    }
}

#[test]
fn natural_language_forms() {
    let expected = CalendarDate::new(2012, 7, 19).unwrap();
    for text in ["July 19, 2012", "07/19/2012", "19 July 2012"] {
        assert_eq!(
            date(Some(text.into()), None, None).unwrap(),
            expected,
            "mismatch for {text:?}"
        );
    }
}

#[test]
fn month_day_overrides_combine_with_year() {
    // Overrides replace whatever month/day the first argument implied.
    assert_eq!(
        date(Some(2012.into()), Some(7), Some(19)).unwrap(),
        CalendarDate::new(2012, 7, 19).unwrap()
    );
    assert_eq!(
        date(Some(20121101.into()), Some(7), Some(19)).unwrap(),
        CalendarDate::new(2012, 7, 19).unwrap()
    );
    assert_eq!(
        date(Some(2012.into()), Some(7), None).unwrap(),
        CalendarDate::new(2012, 7, 1).unwrap()
    );
}

#[test]
fn omitted_input_is_current_date() {
    assert_eq!(date(None, None, None).unwrap(), CalendarDate::today());
}

#[test]
fn invalid_inputs_fail_with_invalid_date_error() {
    assert!(matches!(
        date(Some(20201340.into()), None, None),
        Err(InvalidDateError::InvalidMonth { month: 13 })
    ));
    assert!(matches!(
        date(Some("not a date".into()), None, None),
        Err(InvalidDateError::Unparseable { .. })
    ));
    assert!(matches!(
        date(Some(20190229.into()), None, None),
        Err(InvalidDateError::InvalidDay { .. })
    ));
    assert!(matches!(
        date(Some(123.into()), None, None),
        Err(InvalidDateError::InvalidNumeric { .. })
    ));
}

#[test]
fn leap_day_round_trips_through_compact_form() {
    assert_eq!(
        date(Some(20160229.into()), None, None).unwrap(),
        CalendarDate::new(2016, 2, 29).unwrap()
    );
}

#[test]
fn override_validation_applies() {
    assert!(date(Some(2019.into()), Some(2), Some(29)).is_err());
    assert!(date(Some(2019.into()), Some(13), None).is_err());
}
