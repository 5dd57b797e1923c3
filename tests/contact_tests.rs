mod common;

#[cfg(test)]
pub mod contact_tests {
    use super::common::*;

    use savory_bistro::models::*;
    use savory_bistro::types::{ContactReceipt, NewsletterReceipt};

    fn receipt() -> ContactReceipt {
        ContactReceipt {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            reset_after_ms: 3000,
        }
    }

    #[test]
    fn test_valid_contact_form() {
        let message = get_valid_contact_form().validate().unwrap();

        assert_eq!(message.name, "Grace Hopper");
        assert_eq!(message.subject, "Private dining");
        assert!(message.check().is_ok());
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = get_valid_contact_form();
        form.subject = String::new();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_required_contact_fields() {
        let errors = ContactForm::default().validate().unwrap_err();

        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
        assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
        assert!(!errors.contains(ContactField::Subject));
    }

    #[test]
    fn test_contact_bad_email() {
        let mut form = get_valid_contact_form();
        form.email = "grace at example.com".to_string();

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.get(ContactField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_contact_email_with_surrounding_spaces_is_rejected() {
        for raw in [" grace@example.com", "grace@example.com "] {
            let mut form = get_valid_contact_form();
            form.email = raw.to_string();

            let errors = form.validate().unwrap_err();

            assert_eq!(
                errors.get(ContactField::Email),
                Some("Please enter a valid email address")
            );
        }
    }

    #[test]
    fn test_contact_lifecycle() {
        let mut form = get_valid_contact_form();

        assert!(form.try_submit().is_some());
        assert!(form.status.is_submitting());
        assert!(form.try_submit().is_none());

        form.confirm(receipt());
        assert_eq!(form.status.submitted(), Some(&receipt()));

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_contact_errors_clear_on_edit() {
        let mut form = ContactForm::default();
        assert!(form.try_submit().is_none());
        assert!(form.status.is_idle());

        form.set_field(ContactField::Message, "Hello");

        assert!(form.error(ContactField::Message).is_none());
        assert!(form.error(ContactField::Name).is_some());
    }

    #[test]
    fn test_contact_reject() {
        let mut form = get_valid_contact_form();
        form.try_submit().unwrap();

        form.reject("Invalid message: email");

        assert!(form.status.is_idle());
        assert_eq!(form.server_error(), Some("Invalid message: email"));
        assert!(form.try_submit().is_some());
        assert!(form.server_error().is_none());
    }

    #[test]
    fn test_newsletter_flow() {
        let mut form = NewsletterForm::default();

        form.set_email("nope");
        assert!(form.try_submit().is_none());
        assert_eq!(form.error(), Some("Please enter a valid email address"));

        form.set_email("  guest@example.com ");
        assert!(form.error().is_none());
        assert!(form.try_submit().is_none());
        assert!(form.status.is_idle());

        form.set_email("guest@example.com");
        assert_eq!(form.try_submit().as_deref(), Some("guest@example.com"));
        assert!(form.status.is_submitting());

        form.confirm(NewsletterReceipt {
            email: "guest@example.com".to_string(),
            reset_after_ms: 3000,
        });
        assert!(form.status.submitted().is_some());
        assert_eq!(form.email, "");

        form.reset();
        assert!(form.status.is_idle());
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a@.com"));
    }
}
