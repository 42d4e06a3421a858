//! HTTP status codes with their MDN reason phrases.
//!
//! Lookup by code is *soft*: [`HttpStatus::from_code`] returns `None` for an
//! unknown code instead of an error. This differs from the frequency and
//! trade-action tables on purpose and callers rely on it.
//!
//! Ordering is defined only for this table. [`greater_than`] compares only
//! when the operand resolves to a code; [`less_than`] is derived as
//! `!(greater_than || equal)`, so a text operand is "less" but never
//! "greater" or "equal".

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value_name::{self, Numeric, Operand, ValueName, assert_unique};
use crate::error::TallyError;

macro_rules! http_statuses {
    ($( $(#[$meta:meta])* $variant:ident = $code:literal, $desc:literal; )+) => {
        /// A known HTTP status. The discriminant is the status code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum HttpStatus {
            $( $(#[$meta])* $variant = $code, )+
        }

        impl HttpStatus {
            /// Every status in ascending code order.
            pub const ALL: &'static [HttpStatus] = &[$(HttpStatus::$variant,)+];

            /// Reason phrase, e.g. `"Not Found"`.
            pub const fn desc(self) -> &'static str {
                match self {
                    $(HttpStatus::$variant => $desc,)+
                }
            }

            /// Symbolic name, e.g. `"HTTP_404"`.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(HttpStatus::$variant => concat!("HTTP_", $code),)+
                }
            }
        }
    };
}

http_statuses! {
    // informational
    Continue = 100, "Continue";
    SwitchingProtocols = 101, "Switching Protocols";
    Processing = 102, "Processing";
    EarlyHints = 103, "Early Hints";

    // successful
    Ok = 200, "Ok";
    Created = 201, "Created";
    Accepted = 202, "Accepted";
    NonAuthoritativeInformation = 203, "Non-Authoritative Information";
    NoContent = 204, "No Content";
    ResetContent = 205, "Reset Content";
    PartialContent = 206, "Partial Content";
    MultiStatus = 207, "Multi-Status";
    AlreadyReported = 208, "Already Reported";
    ImUsed = 226, "IM Used";

    // redirection
    MultipleChoices = 300, "Multiple Choices";
    MovedPermanently = 301, "Moved Permanently";
    Found = 302, "Found";
    SeeOther = 303, "See Other";
    NotModified = 304, "Not Modified";
    UseProxy = 305, "Use Proxy";
    /// Reserved; no longer used by the protocol.
    Unused = 306, "Unused";
    TemporaryRedirect = 307, "Temporary Redirect";
    PermanentRedirect = 308, "Permanent Redirect";

    // client errors
    BadRequest = 400, "Bad Request";
    Unauthorized = 401, "Unauthorized";
    PaymentRequired = 402, "Payment Required";
    Forbidden = 403, "Forbidden";
    NotFound = 404, "Not Found";
    MethodNotAllowed = 405, "Method Not Allowed";
    NotAcceptable = 406, "Not Acceptable";
    ProxyAuthenticationRequired = 407, "Proxy Authentication Required";
    RequestTimeout = 408, "Request Timeout";
    Conflict = 409, "Conflict";
    Gone = 410, "Gone";
    LengthRequired = 411, "Length Required";
    PreconditionFailed = 412, "Precondition Failed";
    PayloadTooLarge = 413, "Payload Too Large";
    UnsupportedMediaType = 415, "Unsupported Media Type";
    RangeNotSatisfiable = 416, "Range Not Satisfiable";
    ExpectationFailed = 417, "Expectation Failed";
    ImATeapot = 418, "I'm A Teapot";
    MisdirectedRequest = 421, "Misdirected Request";
    UnprocessableContent = 422, "Unprocessable Content";
    Locked = 423, "Locked";
    FailedDependency = 424, "Failed Dependency";
    TooEarly = 425, "Too Early";
    UpgradeRequired = 426, "Upgrade Required";
    PreconditionRequired = 428, "Precondition Required";
    TooManyRequests = 429, "Too Many Requests";
    RequestHeaderFieldsTooLarge = 431, "Request Header Fields Too Large";
    UnavailableForLegalReasons = 451, "Unavailable For Legal Reasons";

    // server errors
    InternalServerError = 500, "Internal Server Error";
    NotImplemented = 501, "Not Implemented";
    BadGateway = 502, "Bad Gateway";
    ServiceUnavailable = 503, "Service Unavailable";
    GatewayTimeout = 504, "Gateway Timeout";
    HttpVersionNotSupported = 505, "HTTP Version Not Supported";
    VariantAlsoNegotiates = 506, "Variant Also Negotiates";
    InsufficientStorage = 507, "Insufficient Storage";
    LoopDetected = 508, "Loop Detected";
    NotExtended = 510, "Not Extended";
    NetworkAuthorizationRequired = 511, "Network Authorization Required";
}

// Codes are discriminants, which the compiler keeps unique.
assert_unique!(labels HttpStatus, desc);

/// Response class, from the first digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl HttpStatus {
    /// Numeric status code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Status for `code`, or `None` when the code is not in the table.
    pub fn from_code(code: u16) -> Option<Self> {
        value_name::find_by_value(i64::from(code))
    }

    /// Parse the [`Display`](fmt::Display) form (`"HTTP 404: Not Found"`).
    ///
    /// `None` when the text is malformed, the code is unknown, or the reason
    /// phrase does not belong to the code.
    pub fn from_display(s: &str) -> Option<Self> {
        let rest = s.strip_prefix("HTTP ")?;
        let (code, desc) = rest.split_once(": ")?;
        let status = Self::from_code(code.parse().ok()?)?;
        (status.desc() == desc).then_some(status)
    }

    pub const fn class(self) -> StatusClass {
        match self.code() {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self.class(), StatusClass::Success)
    }

    pub const fn is_client_error(self) -> bool {
        matches!(self.class(), StatusClass::ClientError)
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self.class(), StatusClass::ServerError)
    }

    /// Client or server error.
    pub const fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl ValueName for HttpStatus {
    const TABLE: &'static str = "http_status";

    fn members() -> &'static [Self] {
        Self::ALL
    }

    fn value(self) -> i64 {
        i64::from(self.code())
    }

    fn label(self) -> Option<&'static str> {
        Some(self.desc())
    }

    fn symbol(self) -> &'static str {
        HttpStatus::symbol(self)
    }

    /// Status codes never compare equal to text, numeric or otherwise.
    fn matches_text(self, _text: &str) -> bool {
        false
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.code(), self.desc())
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

/// Strict conversion, used for deserialization. Prefer
/// [`HttpStatus::from_code`] for lookups.
impl TryFrom<u16> for HttpStatus {
    type Error = TallyError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| TallyError::not_found(Self::TABLE, "code", code))
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// `status == other`. Members and numbers compare by code; text never matches.
pub fn equal(status: HttpStatus, other: Operand<'_, HttpStatus>) -> bool {
    value_name::matches(status, other)
}

/// `status > other`, only when `other` resolves to a code. Text yields `false`.
pub fn greater_than(status: HttpStatus, other: Operand<'_, HttpStatus>) -> bool {
    let code = i64::from(status.code());
    match other {
        Operand::Member(m) => status.code() > m.code(),
        Operand::Numeric(n) => n.is_below(code),
        Operand::Text(_) => false,
    }
}

/// `status >= other`, as `equal || greater_than`.
pub fn greater_equal(status: HttpStatus, other: Operand<'_, HttpStatus>) -> bool {
    equal(status, other) || greater_than(status, other)
}

/// `status < other`, as `!(greater_than || equal)`.
///
/// Not an independent comparison: text and NaN operands come out `true`.
pub fn less_than(status: HttpStatus, other: Operand<'_, HttpStatus>) -> bool {
    !(greater_than(status, other) || equal(status, other))
}

/// `status <= other`, as `less_than || equal`.
pub fn less_equal(status: HttpStatus, other: Operand<'_, HttpStatus>) -> bool {
    less_than(status, other) || equal(status, other)
}

impl PartialEq<u16> for HttpStatus {
    fn eq(&self, other: &u16) -> bool {
        equal(*self, Operand::Numeric(Numeric::from(*other)))
    }
}

impl PartialEq<HttpStatus> for u16 {
    fn eq(&self, other: &HttpStatus) -> bool {
        other == self
    }
}

impl PartialOrd<u16> for HttpStatus {
    fn partial_cmp(&self, other: &u16) -> Option<Ordering> {
        Some(self.code().cmp(other))
    }
}

impl PartialOrd<HttpStatus> for u16 {
    fn partial_cmp(&self, other: &HttpStatus) -> Option<Ordering> {
        Some(self.cmp(&other.code()))
    }
}
