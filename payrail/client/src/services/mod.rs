//! Per-resource services.
//!
//! Every operation follows the same steps: map the typed body outbound,
//! build and finalize a request descriptor, hand it to the transport, and
//! map the response into the declared model. Validation and build errors
//! are returned before anything is sent.

mod customers;
mod payments;
mod refunds;

pub use customers::CustomersService;
pub use payments::PaymentsService;
pub use refunds::RefundsService;

/// Header that makes create operations safe to resubmit.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";
