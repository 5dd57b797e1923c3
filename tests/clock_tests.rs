mod common;

#[cfg(test)]
pub mod clock_tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::common::*;

    use savory_bistro::models::*;

    fn instant(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, d, h, 0, 0).unwrap()
    }

    fn friday_nine_pm_form() -> ReservationForm {
        let mut form = get_valid_reservation_form();
        form.date = "2026-10-16".to_string();
        form.time = "21:00".to_string();
        form
    }

    #[test]
    fn test_local_time_follows_the_zone() {
        let now = instant(17, 4);

        let la = SiteClock::new(chrono_tz::America::Los_Angeles);
        let ny = SiteClock::default();

        assert_eq!(la.local(now), at(date(2026, 10, 16), 21, 0));
        assert_eq!(ny.local(now), at(date(2026, 10, 17), 0, 0));
        assert_eq!(ny.tz(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_browser_and_server_agree_across_utc_midnight() {
        // Friday 21:00 in Los Angeles, already Saturday in UTC.
        let now = instant(17, 4);
        let clock = SiteClock::new(chrono_tz::America::Los_Angeles);

        let request = friday_nine_pm_form()
            .validate(clock.local(now), &schedule())
            .unwrap();

        assert!(request.check(clock.local(now), &schedule()).is_ok());

        // A server reading its own UTC wall clock would call the booking past.
        let errors = request.check(now.naive_utc(), &schedule()).unwrap_err();
        assert!(errors.contains(ReservationField::Date));
    }

    #[test]
    fn test_browser_behind_the_restaurant_sees_slot_passed() {
        // 18:00 for a visitor in Los Angeles, 21:00 at the restaurant.
        let now = instant(17, 1);
        let mut form = friday_nine_pm_form();
        form.time = "19:00".to_string();

        let visitor = SiteClock::new(chrono_tz::America::Los_Angeles).local(now);
        assert!(form.validate(visitor, &schedule()).is_ok());

        let restaurant = SiteClock::default().local(now);
        let errors = form.validate(restaurant, &schedule()).unwrap_err();
        assert_eq!(
            errors.get(ReservationField::Time),
            Some("Please select an available time")
        );
        assert_eq!(form.available_slots(restaurant, &schedule()).first(), Some(&slot(21, 0)));
    }
}
