use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::SubmitContact;
use crate::frontend::components::{
    Alert, Button, Card, EmailInput, ErrorAlert, InfoCard, PageHeader, TextArea, TextInput,
};
use crate::frontend::{failure_message, schedule_reset, use_theme};
use crate::models::{ContactField, ContactForm, WeeklySchedule};

#[component]
pub fn ContactPage() -> impl IntoView {
    let theme = use_theme();
    let hours = WeeklySchedule::default()
        .summary()
        .into_iter()
        .map(|(days, time)| format!("{}: {}", days, time))
        .collect::<Vec<_>>();

    view! {
        <PageHeader
            title="Contact Us"
            subtitle="Questions, private events or feedback. We'd love to hear from you."
        />

        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    <InfoCard icon="📍" title="Visit Us" lines=theme.address.iter().map(|l| l.to_string()).collect()/>
                    <InfoCard
                        icon="📞"
                        title="Call Us"
                        lines=vec![
                            format!("Main: {}", theme.phone_main),
                            format!("Reservations: {}", theme.phone_reservations),
                        ]
                    />
                    <InfoCard
                        icon="✉"
                        title="Email Us"
                        lines=vec![
                            theme.email_general.to_string(),
                            theme.email_reservations.to_string(),
                            theme.email_events.to_string(),
                        ]
                    />
                    <InfoCard icon="🕒" title="Hours" lines=hours/>
                </div>

                <div class="max-w-3xl mx-auto">
                    <ContactFormView/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(ContactForm::default());
    let submit = ServerAction::<SubmitContact>::new();

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        match result {
            Ok(receipt) => {
                let reset_after = Duration::from_millis(receipt.reset_after_ms);
                form.update(|f| f.confirm(receipt));
                schedule_reset(reset_after, form, submit.value(), ContactForm::reset);
            }
            Err(err) => form.update(|f| f.reject(failure_message(&err))),
        }
    });

    let value = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let error = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };
    let setter = move |field: ContactField| {
        Callback::new(move |v: String| form.update(|f| f.set_field(field, v)))
    };

    let submitting = Signal::derive(move || form.with(|f| f.status.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = form.try_update(ContactForm::try_submit).flatten() {
            submit.dispatch(SubmitContact { message });
        }
    };

    view! {
        <Card class="p-8">
            <h2 class=format!("text-2xl font-bold mb-6 {}", theme.heading)>"Send Us a Message"</h2>

            {move || form.with(|f| f.status.submitted().cloned()).map(|receipt| view! {
                <Alert
                    title="Message Sent!"
                    message=format!(
                        "Thank you, {}. We'll get back to you at {} as soon as possible.",
                        receipt.name,
                        receipt.email,
                    )
                />
            })}
            {move || form.with(|f| f.server_error().map(str::to_string)).map(|message| view! {
                <ErrorAlert message=message/>
            })}

            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <TextInput
                        label="Your Name"
                        name="name"
                        placeholder="John Doe"
                        required=true
                        value=value(ContactField::Name)
                        on_input=setter(ContactField::Name)
                        error=error(ContactField::Name)
                    />
                    <EmailInput
                        label="Email Address"
                        value=value(ContactField::Email)
                        on_input=setter(ContactField::Email)
                        error=error(ContactField::Email)
                    />
                </div>
                <TextInput
                    label="Subject"
                    name="subject"
                    placeholder="How can we help?"
                    value=value(ContactField::Subject)
                    on_input=setter(ContactField::Subject)
                />
                <TextArea
                    label="Message"
                    name="message"
                    placeholder="Tell us more..."
                    required=true
                    rows=6
                    value=value(ContactField::Message)
                    on_input=setter(ContactField::Message)
                    error=error(ContactField::Message)
                />
                <Button class="w-full" loading=submitting loading_text="Sending...">
                    "Send Message"
                </Button>
            </form>
        </Card>
    }
}
