pub mod calendar_event;
pub mod cookie;
pub mod donation;
pub mod testimonial;
pub mod verse;

pub use calendar_event::CalendarEvent;
pub use cookie::CookiePreference;
pub use donation::DonationMethod;
pub use testimonial::Testimonial;
pub use verse::{StoredVerse, Verse};
