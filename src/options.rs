//! Round configuration options.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use spacedeck::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_bust_limit(21)
///     .with_stand_on_empty_deck(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Highest total a hand may reach without busting.
    pub bust_limit: u16,
    /// Whether drawing from an empty deck stands the participant instead of
    /// failing with [`crate::ActionError::DeckExhausted`].
    pub stand_on_empty_deck: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            bust_limit: 21,
            stand_on_empty_deck: false,
        }
    }
}

impl RoundOptions {
    /// Sets the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use spacedeck::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_bust_limit(31);
    /// assert_eq!(options.bust_limit, 31);
    /// ```
    #[must_use]
    pub const fn with_bust_limit(mut self, limit: u16) -> Self {
        self.bust_limit = limit;
        self
    }

    /// Sets whether an empty deck stands the drawing participant.
    ///
    /// # Example
    ///
    /// ```
    /// use spacedeck::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_empty_deck(true);
    /// assert!(options.stand_on_empty_deck);
    /// ```
    #[must_use]
    pub const fn with_stand_on_empty_deck(mut self, stand: bool) -> Self {
        self.stand_on_empty_deck = stand;
        self
    }
}
