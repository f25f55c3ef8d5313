pub mod clock;
pub mod errors;
pub mod observer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::HttpError;
pub use observer::{SubscriptionId, Subscribers};
