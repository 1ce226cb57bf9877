use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects the closed-form skewness formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum), value(rename_all = "snake_case"))]
pub enum SkewnessEstimator {
    /// Third central moment over the population variance raised to 3/2.
    #[default]
    Moment,
    /// Adjusted Fisher-Pearson coefficient. Undefined below three observations.
    Fisher,
    /// Sum of cubed standardized deviations with the small-sample correction.
    Sample,
}

/// Selects the closed-form kurtosis formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum), value(rename_all = "snake_case"))]
pub enum KurtosisEstimator {
    #[default]
    Moment,
    /// Fisher's unbiased excess kurtosis. Undefined below three observations.
    Fisher,
    Sample,
    /// `Moment` minus 3.
    Excess,
    /// `Sample` minus its small-sample normal expectation.
    SampleExcess,
}

/// How the downside sum is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum), value(rename_all = "snake_case"))]
pub enum DownsideMethod {
    /// Divide by the full number of observations.
    #[default]
    #[serde(alias = "all")]
    #[cfg_attr(feature = "clap", value(alias = "all"))]
    Full,
    /// Divide by the number of observations below the threshold.
    Subset,
}

/// The conditioning term of a market-timing regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum), value(rename_all = "snake_case"))]
pub enum TimingModel {
    /// Quadratic term: `D = excess_rb`.
    #[default]
    #[serde(alias = "TM")]
    TreynorMazuy,
    /// Indicator term: `D = 1` when `excess_rb < 0`.
    #[serde(alias = "HM")]
    HenrikssonMerton,
}

impl SkewnessEstimator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkewnessEstimator::Moment => "moment",
            SkewnessEstimator::Fisher => "fisher",
            SkewnessEstimator::Sample => "sample",
        }
    }
}

impl KurtosisEstimator {
    pub fn as_str(&self) -> &'static str {
        match self {
            KurtosisEstimator::Moment => "moment",
            KurtosisEstimator::Fisher => "fisher",
            KurtosisEstimator::Sample => "sample",
            KurtosisEstimator::Excess => "excess",
            KurtosisEstimator::SampleExcess => "sample_excess",
        }
    }
}

impl DownsideMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownsideMethod::Full => "full",
            DownsideMethod::Subset => "subset",
        }
    }
}

impl TimingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingModel::TreynorMazuy => "treynor_mazuy",
            TimingModel::HenrikssonMerton => "henriksson_merton",
        }
    }
}

impl FromStr for SkewnessEstimator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moment" => Ok(SkewnessEstimator::Moment),
            "fisher" => Ok(SkewnessEstimator::Fisher),
            "sample" => Ok(SkewnessEstimator::Sample),
            other => Err(CoreError::InvalidInput(format!(
                "unknown skewness estimator '{other}'"
            ))),
        }
    }
}

impl FromStr for KurtosisEstimator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moment" => Ok(KurtosisEstimator::Moment),
            "fisher" => Ok(KurtosisEstimator::Fisher),
            "sample" => Ok(KurtosisEstimator::Sample),
            "excess" => Ok(KurtosisEstimator::Excess),
            "sample_excess" => Ok(KurtosisEstimator::SampleExcess),
            other => Err(CoreError::InvalidInput(format!(
                "unknown kurtosis estimator '{other}'"
            ))),
        }
    }
}

impl FromStr for DownsideMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "full" => Ok(DownsideMethod::Full),
            "subset" => Ok(DownsideMethod::Subset),
            other => Err(CoreError::InvalidInput(format!(
                "unknown downside method '{other}'"
            ))),
        }
    }
}

impl FromStr for TimingModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tm" | "treynor_mazuy" | "treynormazuy" => Ok(TimingModel::TreynorMazuy),
            "hm" | "henriksson_merton" | "henrikssonmerton" => Ok(TimingModel::HenrikssonMerton),
            other => Err(CoreError::InvalidInput(format!(
                "unknown market timing model '{other}'"
            ))),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(SkewnessEstimator, KurtosisEstimator, DownsideMethod, TimingModel);
