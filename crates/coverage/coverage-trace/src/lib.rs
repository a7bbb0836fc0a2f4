//! Draw-Call Coverage Tracing
//!
//! Instruments a drawing backend to measure how much of a display each flush
//! cycle repaints. Partial-refresh panels (e-ink, memory LCD, low-power round
//! watch faces) pay per touched pixel, so a UI that repaints 80% of the
//! screen for a clock tick is a bug worth finding.
//!
//! # Architecture
//!
//! ```text
//! UI pipeline ──► TracingDrawer ──► DrawingBackend (GraphicsBackend<D: DrawTarget>, ...)
//!                   │
//!                   ├─ estimator     raw pixel area per fill primitive
//!                   ├─ accumulator   capped running total for the cycle
//!                   └─ recorder      one text line per call
//!
//! flush ──► FlushCycleReporter::finish_cycle ──► FlushRecord ──► FlushSink
//! ```
//!
//! The drawer never alters a call: each primitive is forwarded once, with
//! the arguments it received, whatever accounting produced.
//!
//! # Example
//!
//! ```
//! use coverage_specs::displays::MIMXRT595_ROUND;
//! use coverage_trace::{FlushCycleReporter, FlushSink, MemorySink, NullBackend, TracingDrawer};
//! use embedded_graphics::pixelcolor::BinaryColor;
//!
//! let mut drawer = TracingDrawer::new(NullBackend::<BinaryColor>::new(), MIMXRT595_ROUND.geometry);
//! let mut reporter = FlushCycleReporter::new();
//! let mut sink = MemorySink::new();
//!
//! // A clock tick repaints a small badge...
//! drawer.fill_rectangle(BinaryColor::On, 180, 180, 220, 200).unwrap();
//! sink.accept(&reporter.finish_cycle(&mut drawer)).unwrap();
//!
//! // ...a screen change repaints everything.
//! drawer.fill_circle(BinaryColor::Off, 0, 0, 392).unwrap();
//! sink.accept(&reporter.finish_cycle(&mut drawer)).unwrap();
//!
//! let percents: Vec<u64> = sink.records().iter().map(|r| r.coverage_percent).collect();
//! assert_eq!(percents, [0, 100]);
//! ```
//!
//! # Features
//!
//! - **serde** - `Serialize`/`Deserialize` for [`FlushRecord`], [`DrawOperation`]
//!   and replay outcomes

mod accumulator;
mod backend;
mod drawer;
pub mod estimator;
mod operation;
mod recorder;
pub mod replay;
mod report;
mod sink;

pub mod mocks;

pub use accumulator::{AccountingError, AreaAccumulator};
pub use backend::{DrawingBackend, GraphicsBackend, NullBackend};
pub use drawer::{DrawError, TracingDrawer};
pub use operation::{DrawOperation, Param, ParamList, ParamValue, ParseError};
pub use recorder::DrawCallRecorder;
pub use report::{coverage_percent, FlushCycleReporter, FlushRecord, FlushSink, MemorySink};
pub use sink::{DirectorySink, SinkError, CYCLE_SEPARATOR};
