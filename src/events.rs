//! Notifications the scheduler emits to its host.

use crate::model::{NewBooking, ParentResource};

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerEvent {
    /// A selection was confirmed. The host assigns the id and stores the booking.
    BookingCreated(NewBooking),
    /// A parent was expanded or collapsed. Carries the whole replacement tree.
    ResourcesChanged(Vec<ParentResource>),
}
