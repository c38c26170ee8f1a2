//! View state shared by the role view controllers.
//!
//! Every controller moves through the same states:
//!
//! ```text
//! Uninitialized ──activate──▶ Loading ──ok──▶ Ready
//!                                 │
//!                                 └──err──▶ Failed
//!
//! Ready ──mutate-then-refresh──▶ Loading ──▶ Ready | Failed   (admin only)
//! ```
//!
//! Controllers push every transition to a [`Render`] callback supplied by the
//! caller. A failed startup is a visible [`ViewState::Failed`] state, not a
//! logged-and-forgotten error.

use std::fmt;

use srms_core::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Uninitialized,
    Loading,
    Ready(T),
    /// Holds the user-facing error message.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(view) => Self::Ready(view),
            Err(err) => Self::Failed(err.user_message()),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

/// Receives every state transition of a controller.
pub trait Render<T> {
    fn render(&mut self, state: &ViewState<T>);
}

impl<T, F> Render<T> for F
where
    F: FnMut(&ViewState<T>),
{
    fn render(&mut self, state: &ViewState<T>) {
        self(state)
    }
}

/// Fetch-and-render capability shared by all role controllers.
#[allow(async_fn_in_trait)]
pub trait ViewController {
    type View;

    fn state(&self) -> &ViewState<Self::View>;

    /// Runs the screen's startup sequence and returns the resulting state,
    /// which is always `Ready` or `Failed`.
    async fn activate(&mut self) -> &ViewState<Self::View>;
}

/// Outcome message of a write operation, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        Self::Error(err.user_message())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => f.write_str(message),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Header row plus data rows, ready for any table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats `value` with exactly `digits` decimals, rounding half away from
/// zero on the exact binary value (`8.125` gives `"8.13"`).
///
/// `format!("{:.2}")` rounds exact ties to even instead, which displays
/// server grades differently from the web frontend.
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Every f64 has a finite decimal expansion of at most 1074 fractional digits.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&b| b >= b'5');

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && kept.iter().any(|&d| d != 0) {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&d| char::from(b'0' + d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}
