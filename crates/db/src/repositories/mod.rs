pub mod enquiry_repo;
pub mod long_video_repo;
pub mod short_video_repo;
pub mod testimonial_repo;

pub use enquiry_repo::EnquiryRepo;
pub use long_video_repo::LongVideoRepo;
pub use short_video_repo::ShortVideoRepo;
pub use testimonial_repo::TestimonialRepo;
