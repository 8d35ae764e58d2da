use chrono::{Datelike, Local, NaiveDate};

/// Number of completed years between `date_of_birth` and `today`.
///
/// A birth date after `today`, or the unset date ([NaiveDate::MIN]), gives 0.
/// Someone born on February 29 gets one year older on March 1 of non-leap years.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    if date_of_birth == NaiveDate::MIN || date_of_birth > today {
        return 0;
    }

    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// Same as [age_in_years], using the local date as today
pub fn age_today(date_of_birth: NaiveDate) -> u32 {
    age_in_years(date_of_birth, Local::now().date_naive())
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(input: &str) -> NaiveDate {
        NaiveDate::parse_from_str(input, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_age_in_years() {
        let today = date("2025-07-09");
        let test_cases = vec![
            // birthday already passed
            ("2000-06-10", 25),
            // birthday still to come
            ("2000-12-25", 24),
            // birthday today
            ("2000-07-09", 25),
            // born today
            ("2025-07-09", 0),
            ("2025-07-10", 0),
        ];
        for (date_of_birth, expected) in test_cases {
            assert_eq!(age_in_years(date(date_of_birth), today), expected, "{date_of_birth}");
        }
    }

    #[test]
    fn unset_date_of_birth_gives_zero() {
        assert_eq!(age_in_years(NaiveDate::MIN, date("2025-07-09")), 0);
    }

    #[test]
    fn leap_day_birthday() {
        let date_of_birth = date("2000-02-29");
        assert_eq!(age_in_years(date_of_birth, date("2025-02-28")), 24);
        assert_eq!(age_in_years(date_of_birth, date("2025-03-01")), 25);
        assert_eq!(age_in_years(date_of_birth, date("2024-02-29")), 24);
    }

    #[test]
    fn age_today_is_consistent() {
        let date_of_birth = date("1990-01-01");
        assert!(age_today(date_of_birth) >= 35);
    }
}
