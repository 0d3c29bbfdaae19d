//! Run-time engine selection.
//!
//! [`EngineKind`] names an engine variant; [`SourceConfig`] pairs it with an
//! optional seed and creates a boxed source. Absent a seed, the source is
//! seeded from process entropy and the seed is logged.

use std::fmt;
use std::str::FromStr;

use crate::engine::{
    RandomEngine, SplitMix64, WyRand, XorShift, Xoshiro256Plus, Xoshiro256PlusPlus,
    Xoshiro256StarStar, Xoshiro512StarStar,
};
use crate::error::RandomError;
use crate::seed::entropy_seed;
use crate::source::RandomSource;

/// Engine variants selectable at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Legacy 64-bit xorshift.
    XorShift,
    /// SplitMix64.
    SplitMix64,
    /// xoshiro256** (default).
    #[default]
    Xoshiro256StarStar,
    /// xoshiro256++.
    Xoshiro256PlusPlus,
    /// xoshiro256+.
    Xoshiro256Plus,
    /// xoshiro512**.
    Xoshiro512StarStar,
    /// WyRand.
    WyRand,
}

impl EngineKind {
    /// Every variant, in display order.
    pub const ALL: [EngineKind; 7] = [
        EngineKind::Xoshiro256StarStar,
        EngineKind::Xoshiro256PlusPlus,
        EngineKind::Xoshiro256Plus,
        EngineKind::Xoshiro512StarStar,
        EngineKind::WyRand,
        EngineKind::SplitMix64,
        EngineKind::XorShift,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::XorShift => "xorshift",
            EngineKind::SplitMix64 => "splitmix64",
            EngineKind::Xoshiro256StarStar => "xoshiro256**",
            EngineKind::Xoshiro256PlusPlus => "xoshiro256++",
            EngineKind::Xoshiro256Plus => "xoshiro256+",
            EngineKind::Xoshiro512StarStar => "xoshiro512**",
            EngineKind::WyRand => "wyrand",
        }
    }

    /// Creates a boxed engine of this kind initialised with `seed`.
    pub fn create(&self, seed: u64) -> Box<dyn RandomEngine + Send> {
        match self {
            EngineKind::XorShift => Box::new(XorShift::new(seed)),
            EngineKind::SplitMix64 => Box::new(SplitMix64::new(seed)),
            EngineKind::Xoshiro256StarStar => Box::new(Xoshiro256StarStar::new(seed)),
            EngineKind::Xoshiro256PlusPlus => Box::new(Xoshiro256PlusPlus::new(seed)),
            EngineKind::Xoshiro256Plus => Box::new(Xoshiro256Plus::new(seed)),
            EngineKind::Xoshiro512StarStar => Box::new(Xoshiro512StarStar::new(seed)),
            EngineKind::WyRand => Box::new(WyRand::new(seed)),
        }
    }
}

impl FromStr for EngineKind {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xorshift" | "xorshift64" => Ok(EngineKind::XorShift),
            "splitmix64" | "splitmix" => Ok(EngineKind::SplitMix64),
            "xoshiro256**" | "xoshiro256starstar" | "xoshiro256ss" | "default" => {
                Ok(EngineKind::Xoshiro256StarStar)
            }
            "xoshiro256++" | "xoshiro256plusplus" | "xoshiro256pp" => {
                Ok(EngineKind::Xoshiro256PlusPlus)
            }
            "xoshiro256+" | "xoshiro256plus" | "xoshiro256p" => Ok(EngineKind::Xoshiro256Plus),
            "xoshiro512**" | "xoshiro512starstar" | "xoshiro512ss" => {
                Ok(EngineKind::Xoshiro512StarStar)
            }
            "wyrand" => Ok(EngineKind::WyRand),
            _ => Err(RandomError::invalid_argument(
                "engine",
                format!("unknown engine '{}'", s),
            )),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EngineKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EngineKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        EngineKind::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Random source configuration.
///
/// Use [`SourceConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use numrand_core::{EngineKind, SourceConfig};
///
/// let config = SourceConfig::builder()
///     .engine(EngineKind::Xoshiro256PlusPlus)
///     .seed(42)
///     .build();
///
/// assert_eq!(config.engine(), EngineKind::Xoshiro256PlusPlus);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceConfig {
    /// Engine variant.
    engine: EngineKind,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SourceConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::default()
    }

    /// Returns the engine variant.
    #[inline]
    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the configured seed, or draws one from process entropy.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(entropy_seed)
    }

    /// Creates a source over the configured engine.
    ///
    /// ```rust
    /// use numrand_core::SourceConfig;
    ///
    /// let config = SourceConfig::builder().seed(5).build();
    /// let mut a = config.create_source();
    /// let mut b = config.create_source();
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn create_source(&self) -> RandomSource<Box<dyn RandomEngine + Send>> {
        let seed = self.resolve_seed();
        tracing::debug!(engine = %self.engine, seed, "creating random source");
        RandomSource::new(self.engine.create(seed))
    }
}

/// Builder for [`SourceConfig`].
#[derive(Clone, Debug, Default)]
pub struct SourceConfigBuilder {
    engine: Option<EngineKind>,
    seed: Option<u64>,
}

impl SourceConfigBuilder {
    /// Sets the engine variant (default: xoshiro256**).
    #[inline]
    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SourceConfig {
        SourceConfig {
            engine: self.engine.unwrap_or_default(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_round_trips_names() {
        for kind in EngineKind::ALL {
            assert_eq!(kind.name().parse::<EngineKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_engine_kind_aliases() {
        assert_eq!(
            "Xoshiro256StarStar".parse::<EngineKind>().unwrap(),
            EngineKind::Xoshiro256StarStar
        );
        assert_eq!(" WYRAND ".parse::<EngineKind>().unwrap(), EngineKind::WyRand);
        assert_eq!("xorshift64".parse::<EngineKind>().unwrap(), EngineKind::XorShift);
    }

    #[test]
    fn test_engine_kind_unknown() {
        let err = "mersenne".parse::<EngineKind>().unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument { name: "engine", .. }));
        assert!(err.to_string().contains("mersenne"));
    }

    #[test]
    fn test_create_matches_concrete_engine() {
        let mut boxed = EngineKind::Xoshiro512StarStar.create(17);
        let mut concrete = Xoshiro512StarStar::new(17);
        for _ in 0..20 {
            assert_eq!(boxed.next_u64(), concrete.next_u64());
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = SourceConfig::builder().build();
        assert_eq!(config.engine(), EngineKind::Xoshiro256StarStar);
        assert_eq!(config.seed(), None);
        assert_eq!(config, SourceConfig::default());
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = SourceConfig::builder()
            .engine(EngineKind::XorShift)
            .maybe_seed(Some(99))
            .build();
        let mut a = config.create_source();
        let mut b = RandomSource::new(XorShift::new(99));
        for _ in 0..50 {
            assert_eq!(a.next_double(), b.next_double());
        }
    }

    #[test]
    fn test_unseeded_config_draws_entropy() {
        let config = SourceConfig::builder().build();
        let mut a = config.create_source();
        let mut b = config.create_source();
        let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }
}
