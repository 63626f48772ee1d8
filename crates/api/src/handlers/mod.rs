pub mod admin;
pub mod enquiries;
pub mod health;
pub mod long_videos;
pub mod short_videos;
pub mod testimonials;
