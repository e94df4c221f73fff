//! Format constraints on string fields.

use payrail_define::Pattern;

/// ISO 4217 codes of the settlement currencies the API accepts.
pub static CURRENCY_CODE: Pattern = Pattern::regex(
    "currency_code",
    "USD|EUR|GBP|JPY|CAD|AUD|CHF|SGD|HKD|IDR|PHP|THB|MYR|VND|INR",
);

/// ISO 3166-1 alpha-2 country code.
pub static COUNTRY_CODE: Pattern = Pattern::regex("country_code", "[A-Z]{2}");

/// E.164 phone number.
pub static PHONE_NUMBER: Pattern = Pattern::regex("phone_number", r"\+[1-9][0-9]{6,14}");

/// Last four digits of a card number.
pub static CARD_LAST4: Pattern = Pattern::regex("card_last4", "[0-9]{4}");

pub static STATEMENT_DESCRIPTOR: Pattern = Pattern::descriptive(
    "statement_descriptor",
    "At most 22 characters; must not contain <, >, \\, ' or \"",
);
