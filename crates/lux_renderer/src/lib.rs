//! Lux renderer - CPU sphere tracing of a 2D light.
//!
//! Renders a grayscale image of a scene holding a single disc-shaped light.
//! Every pixel gathers light by firing rays in all directions and marching
//! them against the light's signed distance field.
//!
//! The pipeline, leaves first:
//! - [`march`]: sphere-trace one ray, hit or miss
//! - [`sample`]: average many rays around a point
//! - [`synthesize`]: sample every pixel into a [`PixelBuffer`]
//! - [`render_parallel`]: split the frame into [`RowBand`]s across workers

mod band;
mod config;
mod error;
mod frame;
mod march;
mod sampler;
mod scheduler;

pub use band::{partition_rows, split_bands, RowBand};
pub use config::{IntensityOverflow, RenderConfig, SamplingStrategy, DEFAULT_LIGHT};
pub use error::{RenderError, RenderResult, WorkerFailure};
pub use frame::{quantize, render_rows, synthesize, PixelBuffer, CHANNELS};
pub use march::{march, BACKGROUND, LIGHT_EMISSION};
pub use sampler::{gen_f32, sample, sample_angle};
pub use scheduler::{render_bands_with, render_parallel, seed_for_worker};

/// Re-export the math types from lux_math
pub use lux_math::{direction_from_angle, Disc, Ray2, Vec2};
