use std::fmt::{Display, Formatter};

use bon::Builder;
use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::pricing,
    quantity::{
        money::{Pounds, WholePounds},
        percent::Percent,
    },
};

/// Skip size in cubic yards, the key by which an option is selected.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct SkipSize(pub u32);

impl SkipSize {
    /// Pre-selected size of the compiled-in catalog.
    pub const DEFAULT: Self = Self(6);
}

/// One purchasable skip.
#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Builder)]
pub struct SkipOption {
    pub id: u64,

    pub size: SkipSize,

    pub hire_period_days: u32,

    /// For example, «50-60 bin bags».
    #[serde(default)]
    #[builder(into, default)]
    pub capacity: String,

    /// For example, «Kitchen renovations».
    #[serde(default)]
    #[builder(into, default)]
    pub ideal_for: String,

    pub price_before_vat: Pounds,

    pub vat: Percent,

    #[serde(default)]
    #[builder(default)]
    pub allowed_on_road: bool,

    #[serde(default)]
    #[builder(default)]
    pub allows_heavy_waste: bool,

    #[serde(default)]
    #[builder(default)]
    pub popular: bool,
}

impl SkipOption {
    pub fn total_price(&self) -> WholePounds {
        pricing::total_price(self.price_before_vat, self.vat)
    }

    pub fn features(&self) -> EnumSet<Feature> {
        let mut features = EnumSet::empty();
        if self.allowed_on_road {
            features.insert(Feature::RoadPlacement);
        }
        if self.allows_heavy_waste {
            features.insert(Feature::HeavyWaste);
        }
        features
    }

    pub const fn size_class(&self) -> SizeClass {
        SizeClass::of(self.size)
    }
}

#[derive(Debug, enumset::EnumSetType)]
pub enum Feature {
    RoadPlacement,
    HeavyWaste,
}

impl Feature {
    /// Label for the compact grid card.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::RoadPlacement => "Road OK",
            Self::HeavyWaste => "Heavy Waste",
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoadPlacement => write!(f, "Road Placement Allowed"),
            Self::HeavyWaste => write!(f, "Heavy Waste Accepted"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const fn of(size: SkipSize) -> Self {
        match size.0 {
            0..=6 => Self::Small,
            7..=10 => Self::Medium,
            _ => Self::Large,
        }
    }
}

impl Display for SizeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "Small"),
            Self::Medium => write!(f, "Medium"),
            Self::Large => write!(f, "Large"),
        }
    }
}
