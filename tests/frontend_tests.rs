mod common;

#[cfg(test)]
pub mod frontend_tests {
    use leptos::prelude::*;

    use super::common::*;

    use savory_bistro::frontend::clear_submission;
    use savory_bistro::models::*;
    use savory_bistro::types::ContactReceipt;

    fn confirmed_form() -> ContactForm {
        let mut form = get_valid_contact_form();
        form.try_submit().unwrap();
        form.confirm(ContactReceipt {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            reset_after_ms: 3000,
        });
        form
    }

    #[test]
    fn test_clear_submission_resets_form_and_result() {
        let owner = Owner::new();
        let (form, result) =
            owner.with(|| (RwSignal::new(confirmed_form()), RwSignal::new(Some(1u32))));

        clear_submission(form, result, ContactForm::reset);

        assert_eq!(form.get_untracked(), ContactForm::default());
        assert_eq!(result.get_untracked(), None);
    }

    #[test]
    fn test_clear_submission_after_unmount_is_a_no_op() {
        let owner = Owner::new();
        let (form, result) =
            owner.with(|| (RwSignal::new(confirmed_form()), RwSignal::new(Some(1u32))));

        // The page was navigated away from before the reset timer fired.
        owner.cleanup();

        clear_submission(form, result, ContactForm::reset);

        assert!(form.try_get_untracked().is_none());
        assert!(result.try_get_untracked().is_none());
    }
}
