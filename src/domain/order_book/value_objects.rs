use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[display(fmt = "BUY")]
    #[strum(serialize = "BUY")]
    Buy,
    #[display(fmt = "SELL")]
    #[strum(serialize = "SELL")]
    Sell,
}

impl Side {
    /// Lower-case form used in CSS modifiers (`order-book__row--buy`).
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Value Object - corner of a row an annotation callout hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    #[display(fmt = "left-top")]
    LeftTop,
    #[display(fmt = "left-bottom")]
    LeftBottom,
    #[display(fmt = "right-top")]
    RightTop,
    #[display(fmt = "right-bottom")]
    RightBottom,
}

impl Quadrant {
    pub fn is_left(&self) -> bool {
        matches!(self, Quadrant::LeftTop | Quadrant::LeftBottom)
    }
}
