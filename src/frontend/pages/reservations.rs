use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::SubmitReservation;
use crate::frontend::components::{
    Button, ButtonVariant, Card, EmailInput, ErrorAlert, PageHeader, SelectInput, TextArea,
    TextInput,
};
use crate::frontend::{failure_message, use_clock, use_theme};
use crate::models::{MAX_GUESTS_OFFERED, ReservationField, ReservationForm, WeeklySchedule};
use crate::types::ReservationConfirmation;

const POLICIES: [&str; 4] = [
    "Reservations are held for 15 minutes past the booked time.",
    "Parties of more than 10 guests, please call us directly.",
    "Please let us know about allergies in the special requests field.",
    "Cancellations are appreciated at least 24 hours in advance.",
];

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let form = RwSignal::new(ReservationForm::default());

    view! {
        <PageHeader
            title="Make a Reservation"
            subtitle="Reserve your table and let us prepare an unforgettable evening."
        />

        <section class="py-16">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-3 gap-10">
                <div class="lg:col-span-2">
                    {move || {
                        match form.with(|f| f.status.submitted().cloned()) {
                            Some(confirmation) => view! {
                                <Confirmation confirmation=confirmation form=form/>
                            }
                            .into_any(),
                            None => view! { <ReservationFormView form=form/> }.into_any(),
                        }
                    }}
                </div>
                <aside class="space-y-8">
                    <HoursPanel/>
                    <PolicyPanel/>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn ReservationFormView(form: RwSignal<ReservationForm>) -> impl IntoView {
    let theme = use_theme();
    let schedule = WeeklySchedule::default();
    // Read fresh on every call so a page left open past midnight moves on.
    let clock = use_clock();
    let submit = ServerAction::<SubmitReservation>::new();

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        match result {
            Ok(confirmation) => {
                log::debug!("Reservation confirmed for {}", confirmation.date);
                form.update(|f| f.confirm(confirmation));
            }
            Err(err) => form.update(|f| f.reject(failure_message(&err))),
        }
        submit.value().set(None);
    });

    let value = move |field: ReservationField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let error = move |field: ReservationField| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };
    let setter = move |field: ReservationField| {
        Callback::new(move |v: String| form.update(|f| f.set_field(field, v)))
    };

    let on_date =
        Callback::new(move |v: String| form.update(|f| f.set_date(v, clock.now(), &schedule)));

    let time_options = Signal::derive(move || {
        form.with(|f| f.available_slots(clock.now(), &schedule))
            .into_iter()
            .map(|slot| (slot.value(), slot.label()))
            .collect::<Vec<_>>()
    });
    let time_hint = move || {
        let hint = if form.with(|f| f.parsed_date().is_none()) {
            Some("Select a date first")
        } else if time_options.with(Vec::is_empty) {
            Some("No times available on this date")
        } else {
            None
        };
        hint.map(|text| view! { <p class=format!("mt-1 text-xs {}", theme.body)>{text}</p> })
    };

    let guest_options = Signal::stored(
        (1..=MAX_GUESTS_OFFERED)
            .map(|n| {
                let label = if n == 1 { "1 Guest".to_string() } else { format!("{} Guests", n) };
                (n.to_string(), label)
            })
            .collect::<Vec<_>>(),
    );

    let submitting = Signal::derive(move || form.with(|f| f.status.is_submitting()));
    let today = clock.now().date().format("%Y-%m-%d").to_string();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = form.try_update(|f| f.try_submit(clock.now(), &schedule)).flatten();
        if let Some(request) = request {
            submit.dispatch(SubmitReservation { request });
        }
    };

    view! {
        <Card class="p-8">
            <h2 class=format!("text-2xl font-bold mb-6 {}", theme.heading)>"Reservation Details"</h2>

            {move || form.with(|f| f.server_error().map(str::to_string)).map(|message| view! {
                <ErrorAlert message=message/>
            })}

            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <TextInput
                        label="Full Name"
                        name="name"
                        placeholder="John Doe"
                        required=true
                        value=value(ReservationField::Name)
                        on_input=setter(ReservationField::Name)
                        error=error(ReservationField::Name)
                    />
                    <EmailInput
                        label="Email Address"
                        value=value(ReservationField::Email)
                        on_input=setter(ReservationField::Email)
                        error=error(ReservationField::Email)
                    />
                    <TextInput
                        label="Phone Number"
                        name="phone"
                        input_type="tel"
                        placeholder="(555) 123-4567"
                        required=true
                        value=value(ReservationField::Phone)
                        on_input=setter(ReservationField::Phone)
                        error=error(ReservationField::Phone)
                    />
                    <SelectInput
                        label="Number of Guests"
                        name="guests"
                        required=true
                        options=guest_options
                        value=value(ReservationField::Guests)
                        on_change=setter(ReservationField::Guests)
                        error=error(ReservationField::Guests)
                    />
                    <TextInput
                        label="Date"
                        name="date"
                        input_type="date"
                        required=true
                        min=today
                        value=value(ReservationField::Date)
                        on_input=on_date
                        error=error(ReservationField::Date)
                    />
                    <div>
                        <SelectInput
                            label="Time"
                            name="time"
                            required=true
                            placeholder="Select a time"
                            options=time_options
                            value=value(ReservationField::Time)
                            on_change=setter(ReservationField::Time)
                            error=error(ReservationField::Time)
                        />
                        {time_hint}
                    </div>
                </div>

                <TextArea
                    label="Special Requests"
                    name="special_requests"
                    placeholder="Allergies, celebrations, seating preferences..."
                    rows=4
                    value=value(ReservationField::SpecialRequests)
                    on_input=setter(ReservationField::SpecialRequests)
                />

                <Button class="w-full" loading=submitting loading_text="Processing...">
                    "Confirm Reservation"
                </Button>
            </form>
        </Card>
    }
}

#[component]
fn Confirmation(confirmation: ReservationConfirmation, form: RwSignal<ReservationForm>) -> impl IntoView {
    let theme = use_theme();
    let guests = if confirmation.guests == 1 {
        "1 guest".to_string()
    } else {
        format!("{} guests", confirmation.guests)
    };

    view! {
        <Card class="p-10 text-center">
            <div class="w-16 h-16 mx-auto mb-6 rounded-full bg-green-500/15 text-green-600 text-3xl flex items-center justify-center">
                "✓"
            </div>
            <h2 class=format!("text-3xl font-bold mb-4 {}", theme.heading)>"Reservation Confirmed!"</h2>
            <p class=format!("text-lg mb-6 {}", theme.body)>{confirmation.message()}</p>
            <dl class=format!("inline-grid grid-cols-2 gap-x-6 gap-y-2 text-left mb-8 {}", theme.body)>
                <dt class="font-semibold">"Name"</dt>
                <dd>{confirmation.name.clone()}</dd>
                <dt class="font-semibold">"Date"</dt>
                <dd>{confirmation.date_label()}</dd>
                <dt class="font-semibold">"Time"</dt>
                <dd>{confirmation.time.label()}</dd>
                <dt class="font-semibold">"Party"</dt>
                <dd>{guests}</dd>
            </dl>
            <div>
                <Button
                    button_type="button"
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| form.update(ReservationForm::reset))
                >
                    "Make Another Reservation"
                </Button>
            </div>
        </Card>
    }
}

#[component]
fn HoursPanel() -> impl IntoView {
    let theme = use_theme();
    let hours = WeeklySchedule::default().summary();

    view! {
        <Card class="p-6">
            <h3 class=format!("text-xl font-bold mb-4 {}", theme.heading)>"Opening Hours"</h3>
            <ul class=format!("space-y-2 {}", theme.body)>
                {hours
                    .into_iter()
                    .map(|(days, time)| view! {
                        <li class="flex justify-between gap-4">
                            <span class="font-medium">{days}</span>
                            <span>{time}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <p class=format!("mt-4 text-sm {}", theme.body)>
                "Questions? Call "
                <a href=format!("tel:{}", theme.phone_reservations) class=theme.accent>{theme.phone_reservations}</a>
            </p>
        </Card>
    }
}

#[component]
fn PolicyPanel() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Card class="p-6">
            <h3 class=format!("text-xl font-bold mb-4 {}", theme.heading)>"Reservation Policy"</h3>
            <ul class=format!("list-disc pl-5 space-y-2 text-sm {}", theme.body)>
                {POLICIES.iter().map(|policy| view! { <li>{*policy}</li> }).collect_view()}
            </ul>
        </Card>
    }
}
