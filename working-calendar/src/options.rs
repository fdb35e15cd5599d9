pub use working_calendar_syntax::TokenPolicy;

/// Settings applied while loading a calendar.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ParseOptions {
    /// How day tokens of month cells are read.
    pub policy: TokenPolicy,
}

impl ParseOptions {
    /// Use a new policy for the tokens of month cells.
    ///
    /// ```
    /// use working_calendar::{ParseOptions, TokenPolicy, WorkingCalendar};
    ///
    /// let data = "header\n2018,1;,1,1,1,1,1,1,1,1,1,1,1,247,118,1970,1772.4,1179.6\n";
    /// let strict = ParseOptions::default().with_policy(TokenPolicy::Strict);
    ///
    /// assert!(WorkingCalendar::from_reader(data.as_bytes()).is_ok());
    /// assert!(WorkingCalendar::from_reader_with(data.as_bytes(), strict).is_err());
    /// ```
    pub fn with_policy(self, policy: TokenPolicy) -> Self {
        Self { policy, ..self }
    }
}
