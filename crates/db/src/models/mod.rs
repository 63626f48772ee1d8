pub mod enquiry;
pub mod long_video;
pub mod short_video;
pub mod testimonial;

pub use enquiry::{CreateEnquiry, Enquiry};
pub use long_video::{CreateLongVideo, LongVideo};
pub use short_video::{CreateShortVideo, ShortVideo};
pub use testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
