//! Application models
//!
//! Plain records mirroring what each screen renders. Entities carry no
//! invariants beyond their shape: posts duplicate an author snapshot
//! instead of holding a foreign key, conversations keep a denormalized
//! copy of the last message, and nothing is persisted anywhere.

pub mod booking;
pub mod conversation;
pub mod post;
pub mod registration;
pub mod user;

// Re-export for convenience
pub use booking::{Booking, BookingStatus, PaymentMethod};
pub use conversation::{Conversation, Message};
pub use post::{AuthorRef, Comment, Post, Story};
pub use registration::{RegistrationData, RegistrationMethod};
pub use user::{Gender, User};
