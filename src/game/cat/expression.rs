// Mouth expressions

/// What the cat's mouth is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Expression {
    /// Closed "w" smile
    #[default]
    Normal,
    /// Round open mouth (meowing)
    Open,
    /// Open mouth with the tongue hanging out
    Tongue,
}

impl Expression {
    /// Whether this expression times out back to `Normal`
    pub fn is_timed(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    /// Short name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Open => "open",
            Self::Tongue => "tongue",
        }
    }
}
