//! Fixed collection caps, mirroring the marketing site's fixed-size layout.
//!
//! The video caps are carousel/grid sizes leaking into the data tier; the
//! list limits are hard truncations, not page sizes.

/// Maximum short videos stored at any time.
pub const SHORT_VIDEO_CAP: i64 = 10;

/// Maximum long videos stored at any time.
pub const LONG_VIDEO_CAP: i64 = 10;

/// Maximum testimonials returned by a list call.
pub const TESTIMONIAL_LIST_LIMIT: i64 = 100;

/// Maximum enquiries returned by a list call.
pub const ENQUIRY_LIST_LIMIT: i64 = 1000;
