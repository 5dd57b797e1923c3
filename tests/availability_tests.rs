mod common;

#[cfg(test)]
pub mod availability_tests {
    use chrono::Weekday;

    use super::common::*;

    use savory_bistro::models::*;

    #[test]
    fn test_weekday_slots_cover_open_to_close_inclusive() {
        // Wednesday: 11:00 - 22:00
        let slots = available_slots(date(2026, 10, 21), friday_morning(), &schedule());

        assert_eq!(slots.first(), Some(&slot(11, 0)));
        assert_eq!(slots.last(), Some(&slot(22, 0)));
        assert_eq!(slots.len(), 23);
    }

    #[test]
    fn test_slots_follow_each_days_hours() {
        let now = friday_morning();
        let sched = schedule();

        let saturday = available_slots(date(2026, 10, 17), now, &sched);
        let sunday = available_slots(date(2026, 10, 18), now, &sched);
        let monday = available_slots(date(2026, 10, 19), now, &sched);

        assert_eq!(saturday.last(), Some(&slot(23, 0)));
        assert_eq!(sunday.last(), Some(&slot(21, 0)));
        assert_eq!(monday.last(), Some(&slot(22, 0)));
    }

    #[test]
    fn test_slots_are_thirty_minutes_apart_and_sorted() {
        let slots = available_slots(date(2026, 10, 17), friday_morning(), &schedule());

        for pair in slots.windows(2) {
            let gap = pair[1].time() - pair[0].time();
            assert_eq!(gap.num_minutes(), SLOT_INTERVAL_MINUTES);
        }
    }

    #[test]
    fn test_past_date_has_no_slots() {
        let slots = available_slots(date(2026, 10, 15), friday_morning(), &schedule());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_today_drops_elapsed_slots() {
        let today = date(2026, 10, 16);
        let now = at(today, 18, 10);

        let slots = available_slots(today, now, &schedule());

        assert_eq!(slots.first(), Some(&slot(18, 30)));
        assert!(slots.iter().all(|s| s.time() >= now.time()));
        assert_eq!(slots.last(), Some(&slot(23, 0)));
    }

    #[test]
    fn test_today_keeps_slot_at_exact_current_time() {
        let today = date(2026, 10, 16);
        let slots = available_slots(today, at(today, 20, 0), &schedule());
        assert_eq!(slots.first(), Some(&slot(20, 0)));
    }

    #[test]
    fn test_today_before_opening_is_full_day() {
        let today = date(2026, 10, 16);
        let sched = schedule();

        let early = available_slots(today, friday_morning(), &sched);
        let future = generate_slots(sched.hours_on(today), chrono::TimeDelta::minutes(30));

        assert_eq!(early, future);
        assert_eq!(early.len(), 25);
    }

    #[test]
    fn test_today_after_closing_is_empty() {
        let today = date(2026, 10, 18);
        let slots = available_slots(today, at(today, 21, 1), &schedule());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_is_available() {
        let now = friday_morning();
        let sched = schedule();

        assert!(is_available(slot(21, 0), date(2026, 10, 18), now, &sched));
        assert!(!is_available(slot(21, 30), date(2026, 10, 18), now, &sched));
        assert!(!is_available(slot(19, 0), date(2026, 10, 1), now, &sched));
    }

    #[test]
    fn test_schedule_summary_groups_days() {
        let summary = schedule().summary();

        assert_eq!(
            summary,
            vec![
                ("Monday - Thursday".to_string(), "11:00 AM - 10:00 PM".to_string()),
                ("Friday - Saturday".to_string(), "11:00 AM - 11:00 PM".to_string()),
                ("Sunday".to_string(), "11:00 AM - 9:00 PM".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_schedule() {
        let lunch = OpeningHours::new(time(12, 0), time(13, 0));
        let sched = WeeklySchedule::new([lunch; 7]);

        assert_eq!(sched.hours_for(Weekday::Tue), lunch);
        let slots = available_slots(date(2026, 10, 20), friday_morning(), &sched);
        assert_eq!(slots, vec![slot(12, 0), slot(12, 30), slot(13, 0)]);
    }
}
