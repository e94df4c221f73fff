//! Convenient re-exports for working with the payments API models.
//!
//! ## Examples
//!
//! ```
//! use payrail_definitions::prelude::*;
//!
//! let request = CreatePayment::new(1500, "IDR");
//! assert_eq!(request.currency, "IDR");
//! assert_eq!(request.capture_method, None::<CaptureMethod>);
//! ```

pub use crate::registry;

pub use crate::customers::{
    Address, CreateCustomer, Customer, CustomerList, Deleted, ListCustomers, UpdateCustomer,
};
pub use crate::enums::{CaptureMethod, PaymentMethodType, PaymentStatus, RefundStatus};
pub use crate::payments::{
    CapturePayment, CreatePayment, CustomerRef, ListPayments, Payment, PaymentList,
    PaymentMethodDetails, PaymentMethodRef, UpdatePayment,
};
pub use crate::refunds::{CreateRefund, ListRefunds, Refund, RefundList};
