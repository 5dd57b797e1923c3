pub use availability::*;
pub use catalog::*;
pub use clock::*;
pub use contact::*;
pub use gallery::*;
pub use highlights::*;
pub use menu::*;
pub use reservation::*;
pub use schedule::*;
pub use submission::*;
pub use theme::*;
pub use validation::*;

mod availability;
mod catalog;
mod clock;
mod contact;
mod gallery;
mod highlights;
mod menu;
mod reservation;
mod schedule;
mod submission;
mod theme;
mod validation;
