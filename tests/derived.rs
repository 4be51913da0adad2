use datekit::{
    date_math, day, days_in_month, eo_month, julian, week_num, CalendarDate, DateOffset,
};

fn d(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn julian_march_first_leap_and_common() {
    assert_eq!(julian(Some("20200301".into())).unwrap(), 60);
    assert_eq!(julian(Some("20190301".into())).unwrap(), 59);
}

#[test]
fn eo_month_day_matches_days_in_month() {
    for year in [2000, 2019, 2020, 2021] {
        for month in 1..=12 {
            let base = d(year, month, 15);
            let end = eo_month(Some(base.into())).unwrap();
            assert_eq!(
                end.day(),
                days_in_month(year, month).unwrap(),
                "wrong month end for {year}-{month:02}"
            );
            assert_eq!(end.year(), year);
            assert_eq!(end.month(), month);
        }
    }
}

#[test]
fn leap_february_ends() {
    assert_eq!(day(Some(eo_month(Some(d(2000, 2, 1).into())).unwrap().into())).unwrap(), 29);
    assert_eq!(day(Some(eo_month(Some(d(2020, 2, 1).into())).unwrap().into())).unwrap(), 29);
    assert_eq!(day(Some(eo_month(Some(d(2019, 2, 1).into())).unwrap().into())).unwrap(), 28);
    assert_eq!(day(Some(eo_month(Some(d(2021, 2, 1).into())).unwrap().into())).unwrap(), 28);
}

#[test]
fn stepping_past_month_end_advances_the_month() {
    for base in [d(2020, 1, 10), d(2020, 2, 29), d(2019, 12, 5)] {
        let end = eo_month(Some(base.into())).unwrap();
        let next = date_math(Some(end.into()), DateOffset::days(1)).unwrap();
        let next_end = eo_month(Some(next.into())).unwrap();
        assert_ne!(next_end, end, "end of month failed to advance from {base}");
        assert_eq!(next, next_end.first_of_month());
    }
}

#[test]
fn week_num_year_boundaries() {
    // ISO-8601: the week containing the first Thursday is week 1.
    assert_eq!(week_num(Some(d(2015, 12, 31).into())).unwrap(), 53);
    assert_eq!(week_num(Some(d(2016, 1, 4).into())).unwrap(), 1);
    assert_eq!(week_num(Some(d(2021, 1, 1).into())).unwrap(), 53);
    assert_eq!(week_num(Some(d(2021, 1, 4).into())).unwrap(), 1);
}
