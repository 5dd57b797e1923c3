//! Reusable UI building blocks shared by the pages

mod alert;
mod button;
mod card;
mod carousel;
mod dialog;
mod footer;
mod input;
mod layout;
mod nav;

pub use alert::{Alert, AlertVariant, ErrorAlert};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, DishCard, EventCard, FeaturedDishCard, InfoCard, MenuCard, TestimonialCard};
pub use carousel::Carousel;
pub use dialog::Dialog;
pub use footer::Footer;
pub use input::{EmailInput, SelectInput, TextArea, TextInput};
pub use layout::{PageHeader, SectionHeading};
pub use nav::{NAV_LINKS, Navbar};
