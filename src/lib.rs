//! # survmark
//!
//! Statistical-visualization helpers for scientific data analysis:
//! - Median survival time from right-censored time-to-event data
//! - Significance annotation layout (bracket + asterisk label) between
//!   two chart elements
//!
//! The survival computation is pure and stateless: it reads only its
//! arguments and is safe to call concurrently on independent inputs. The
//! annotation side computes geometry and text only; actual drawing is the
//! caller's plotting backend's job, and the axis context is passed
//! explicitly rather than read from a current-figure global.
//!
//! ## Quick Start
//!
//! ```
//! use survmark::median_survival_time;
//!
//! // statuses: 1 = event observed, 0 = censored
//! let median = median_survival_time(&[1.0, 3.0, 5.0], &[1, 1, 1])?;
//! assert_eq!(median, Some(3.0));
//!
//! // A censored middle observation leaves the median undefined.
//! let median = median_survival_time(&[1.0, 3.0, 5.0], &[1, 0, 1])?;
//! assert_eq!(median, None);
//! # Ok::<(), survmark::InvalidInput>(())
//! ```
//!
//! ```
//! use survmark::annotation::{
//!     pairwise_comparison, AnnotationStyle, AnnotationText, AxisSpan,
//!     ElementAnchor, Orientation,
//! };
//!
//! let layout = pairwise_comparison(
//!     ElementAnchor::new(1.0, 10.0),
//!     ElementAnchor::new(2.0, 12.0),
//!     &AnnotationText::PValue(0.003),
//!     Orientation::Horizontal,
//!     AxisSpan::new(0.0, 20.0),
//!     &AnnotationStyle::default(),
//! );
//! assert_eq!(layout.label, "**");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod types;

pub mod annotation;
pub mod output;
pub mod survival;

pub use annotation::{
    pairwise_comparison, AnnotationStyle, AnnotationText, AxisSpan, BracketLayout, ElementAnchor,
    HAlign, Orientation, SignificanceLevel, VAlign,
};
pub use error::InvalidInput;
pub use survival::{median_survival, median_survival_time};
pub use types::{EventStatus, Observation};
