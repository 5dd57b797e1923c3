//! One component per route

mod contact;
mod gallery;
mod home;
mod menu;
mod not_found;
mod reservations;

pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use menu::MenuPage;
pub use not_found::NotFound;
pub use reservations::ReservationsPage;
