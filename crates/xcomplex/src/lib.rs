#![doc = include_str!("../../../README.md")]
#![expect(clippy::float_cmp, reason = "exact zeros and axis angles are decision flags, not approximations")]
#![expect(clippy::cast_precision_loss, reason = "counts are converted to percentages for display only")]

mod add;
mod angle;
mod canonical;
mod elementary;
mod power;
mod rect;
mod table;
pub mod tracer;
mod value;

pub use crate::{
    angle::{normalize, sincospi},
    canonical::Canonical,
    power::guarded_mul,
    rect::{Rect, RectError},
    table::{Cell, Operation, Table, TableError},
    tracer::{NoopTracer, RecordingTracer, StderrTracer, TableTracer, TallyReport, TallyTracer, TraceEvent},
    value::{Kind, Polar},
};
