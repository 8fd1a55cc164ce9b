//! # Configuration Module
//!
//! Run configuration for the header rewriter: the copyright holder, the
//! license identifier, and the first year of the copyright range. The values
//! are fixed per deployment and bundled into a [`HeaderConfig`] that is built
//! once at process start and passed explicitly to the processor.

/// Copyright holder named in every generated header.
pub const COPYRIGHT_HOLDER: &str = "s0up and the autobrr contributors";

/// SPDX identifier of the project license.
pub const LICENSE_ID: &str = "GPL-2.0-or-later";

/// First year of the copyright range.
pub const START_YEAR: i32 = 2025;

/// Immutable header configuration for a single run.
///
/// # Fields
///
/// * `holder` - The copyright holder
/// * `license` - The SPDX license identifier
/// * `start_year` - First year of the copyright range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
  /// The copyright holder
  pub holder: String,
  /// The SPDX license identifier
  pub license: String,
  /// First year of the copyright range
  pub start_year: i32,
}

impl Default for HeaderConfig {
  fn default() -> Self {
    Self {
      holder: COPYRIGHT_HOLDER.to_string(),
      license: LICENSE_ID.to_string(),
      start_year: START_YEAR,
    }
  }
}

impl HeaderConfig {
  /// Renders the copyright year field for the given current year.
  ///
  /// Returns the start year alone while it is still current, and a
  /// `start-current` range once the calendar has moved past it. A clock
  /// behind the start year never produces a backwards range.
  pub fn copyright_years(&self, current_year: i32) -> String {
    if current_year <= self.start_year {
      self.start_year.to_string()
    } else {
      format!("{}-{}", self.start_year, current_year)
    }
  }
}
