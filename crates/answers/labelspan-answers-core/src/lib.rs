//! labelspan-answers-core: dynamic attribute answers keyed by frame.
//!
//! [`FrameAnswerIndex`] records which answer an attribute has on each frame,
//! allows one answer value to span any set of frames, and reads answers back
//! as run-length encoded ranges. The index is generic over the attribute and
//! value types; [`OntologyAttribute`] and [`AnswerValue`] are the concrete
//! types used by the wire layer.

pub mod answer;
pub mod attribute;
pub mod error;
pub mod ids;
pub mod index;
pub mod value;

pub use answer::{Answer, AnswerForFrames};
pub use attribute::{AttributeKind, OntologyAttribute};
pub use error::AnswerError;
pub use ids::{AnswerId, IdAllocator};
pub use index::FrameAnswerIndex;
pub use labelspan_ranges_core::{Frame, FrameDesignation, IntervalSet, Range};
pub use value::{AnswerValue, OptionRef};
