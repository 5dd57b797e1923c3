mod common;

#[cfg(test)]
pub mod reservation_tests {
    use super::common::*;

    use savory_bistro::models::*;
    use savory_bistro::types::ReservationConfirmation;

    #[test]
    fn test_valid_form_builds_request() {
        let form = get_valid_reservation_form();

        let request = form.validate(friday_morning(), &schedule()).unwrap();

        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.date, date(2026, 10, 17));
        assert_eq!(request.time, slot(19, 0));
        assert_eq!(request.guests, 4);
        assert_eq!(request.special_requests, "Window seat, please");
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let mut form = ReservationForm::default();
        form.guests = String::new();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(errors.get(ReservationField::Name), Some("Name is required"));
        assert_eq!(errors.get(ReservationField::Email), Some("Email is required"));
        assert_eq!(errors.get(ReservationField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(ReservationField::Date), Some("Date is required"));
        assert_eq!(errors.get(ReservationField::Time), Some("Time is required"));
        assert_eq!(
            errors.get(ReservationField::Guests),
            Some("Number of guests must be at least 1")
        );
        assert!(!errors.contains(ReservationField::SpecialRequests));
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut form = get_valid_reservation_form();
        form.name = "   ".to_string();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ReservationField::Name), Some("Name is required"));
    }

    #[test]
    fn test_blank_name_and_partial_email_block_submit() {
        let mut form = get_valid_reservation_form();
        form.name = String::new();
        form.email = "bob@".to_string();

        assert!(form.try_submit(friday_morning(), &schedule()).is_none());

        assert_eq!(
            form.errors().fields(),
            vec![ReservationField::Name, ReservationField::Email]
        );
        assert!(form.status.is_idle());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut form = get_valid_reservation_form();
        form.email = "ada@example".to_string();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(
            errors.get(ReservationField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_email_with_surrounding_spaces_is_rejected() {
        for raw in [" bob@x.com", "bob@x.com "] {
            let mut form = get_valid_reservation_form();
            form.email = raw.to_string();

            let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(ReservationField::Email),
                Some("Please enter a valid email address")
            );
        }
    }

    #[test]
    fn test_past_date_is_rejected() {
        let mut form = get_valid_reservation_form();
        form.date = "2026-10-15".to_string();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(errors.get(ReservationField::Date), Some("Please select a future date"));
    }

    #[test]
    fn test_today_is_accepted() {
        let mut form = get_valid_reservation_form();
        form.date = "2026-10-16".to_string();

        assert!(form.validate(friday_morning(), &schedule()).is_ok());
    }

    #[test]
    fn test_time_outside_hours_is_rejected() {
        let mut form = get_valid_reservation_form();
        // Sunday closes at 21:00
        form.date = "2026-10-18".to_string();
        form.time = "22:00".to_string();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(
            errors.get(ReservationField::Time),
            Some("Please select an available time")
        );
    }

    #[test]
    fn test_elapsed_time_today_is_rejected() {
        let today = date(2026, 10, 16);
        let mut form = get_valid_reservation_form();
        form.date = "2026-10-16".to_string();
        form.time = "12:00".to_string();

        let errors = form.validate(at(today, 15, 0), &schedule()).unwrap_err();

        assert!(errors.contains(ReservationField::Time));
    }

    #[test]
    fn test_zero_guests_is_rejected() {
        let mut form = get_valid_reservation_form();
        form.guests = "0".to_string();

        let errors = form.validate(friday_morning(), &schedule()).unwrap_err();

        assert_eq!(
            errors.get(ReservationField::Guests),
            Some("Number of guests must be at least 1")
        );
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut form = ReservationForm::default();
        assert!(form.try_submit(friday_morning(), &schedule()).is_none());
        assert!(form.error(ReservationField::Name).is_some());
        assert!(form.error(ReservationField::Email).is_some());

        form.set_field(ReservationField::Name, "Ada");

        assert!(form.error(ReservationField::Name).is_none());
        assert!(form.error(ReservationField::Email).is_some());
    }

    #[test]
    fn test_set_date_drops_time_no_longer_offered() {
        let now = friday_morning();
        let sched = schedule();
        let mut form = get_valid_reservation_form();
        form.time = "22:30".to_string();

        // Saturday still offers 22:30
        form.set_date("2026-10-17", now, &sched);
        assert_eq!(form.time, "22:30");

        // Sunday closes at 21:00
        form.set_date("2026-10-18", now, &sched);
        assert_eq!(form.time, "");
    }

    #[test]
    fn test_form_slots_need_a_date() {
        let mut form = ReservationForm::default();
        assert!(form.available_slots(friday_morning(), &schedule()).is_empty());

        form.set_date("2026-10-18", friday_morning(), &schedule());
        assert_eq!(
            form.available_slots(friday_morning(), &schedule()).last(),
            Some(&slot(21, 0))
        );
    }

    #[test]
    fn test_submit_lifecycle() {
        let now = friday_morning();
        let sched = schedule();
        let mut form = get_valid_reservation_form();

        let request = form.try_submit(now, &sched).unwrap();
        assert!(form.status.is_submitting());
        assert!(form.errors().is_empty());

        // A second submit while in flight does nothing
        assert!(form.try_submit(now, &sched).is_none());

        form.confirm(ReservationConfirmation::from(request));
        let confirmation = form.status.submitted().unwrap();
        assert_eq!(confirmation.guests, 4);

        form.reset();
        assert!(form.status.is_idle());
        assert_eq!(form.name, "");
        assert_eq!(form.guests, DEFAULT_GUESTS.to_string());
    }

    #[test]
    fn test_reject_returns_to_editing() {
        let mut form = get_valid_reservation_form();
        form.try_submit(friday_morning(), &schedule()).unwrap();

        form.reject("Invalid reservation: time");

        assert!(form.status.is_idle());
        assert_eq!(form.server_error(), Some("Invalid reservation: time"));
        assert_eq!(form.name, "Ada Lovelace");
    }

    #[test]
    fn test_request_check_matches_form_rules() {
        let request = get_valid_reservation_form()
            .validate(friday_morning(), &schedule())
            .unwrap();

        assert!(request.check(friday_morning(), &schedule()).is_ok());

        // The same request a week later is in the past
        let later = at(date(2026, 10, 24), 9, 0);
        let errors = request.check(later, &schedule()).unwrap_err();
        assert!(errors.contains(ReservationField::Date));
    }

    #[test]
    fn test_confirmation_message() {
        let request = get_valid_reservation_form()
            .validate(friday_morning(), &schedule())
            .unwrap();
        let confirmation = ReservationConfirmation::from(request);

        assert_eq!(confirmation.date_label(), "Saturday, October 17, 2026");
        let message = confirmation.message();
        assert!(message.contains("ada@example.com"));
        assert!(message.contains("Saturday, October 17, 2026"));
        assert!(message.contains("7:00 PM"));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ReservationField::ALL {
            assert_eq!(field.as_str().parse::<ReservationField>(), Ok(field));
        }
    }
}
