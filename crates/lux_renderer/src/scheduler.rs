//! Parallel frame rendering.
//!
//! The frame is split into row bands (see [`crate::band`]) and each band is
//! handed to its own worker on a dedicated rayon pool together with a
//! disjoint `&mut` slice of the shared output buffer. Workers never touch
//! rows outside their band, so no locking is needed; the scope join is the
//! only ordering point before the buffer is read.
//!
//! Each worker owns a `StdRng` seeded from the config seed and its worker
//! index, so a render is reproducible for a fixed `(seed, workers)` pair.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::band::{partition_rows, split_bands, RowBand};
use crate::error::{RenderError, RenderResult, WorkerFailure};
use crate::frame::{render_rows, PixelBuffer};
use crate::RenderConfig;

/// Derive worker `worker`'s RNG seed from the base seed (SplitMix64 finalizer).
pub fn seed_for_worker(seed: u64, worker: usize) -> u64 {
    let mut z = seed.wrapping_add((worker as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Render the frame with `config.workers` workers.
///
/// Fails with [`RenderError::WorkersFailed`] naming every worker that did
/// not finish its rows; no partially rendered buffer is ever returned.
pub fn render_parallel(width: u32, height: u32, config: &RenderConfig) -> RenderResult<PixelBuffer> {
    render_bands_with(width, height, config, |band, pixels, rng| {
        render_rows(width, height, band.rows(), config, pixels, rng).map_err(|e| e.to_string())
    })
}

/// Run `job` once per row band on a pool of `config.workers` threads.
///
/// `job` receives the band, the band's slice of the output buffer and the
/// worker's RNG. Returning `Err` or panicking marks the worker as failed.
pub fn render_bands_with<F>(
    width: u32,
    height: u32,
    config: &RenderConfig,
    job: F,
) -> RenderResult<PixelBuffer>
where
    F: Fn(&RowBand, &mut [u8], &mut StdRng) -> Result<(), String> + Sync,
{
    config.validate()?;
    let mut image = PixelBuffer::new(width, height)?;
    let bands = partition_rows(height, config.workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("lux-worker-{i}"))
        .build()?;

    info!(
        "Rendering {}x{} @ {} spp on {} workers",
        width, height, config.samples_per_pixel, config.workers
    );
    let start = Instant::now();

    let mut outcomes: Vec<Option<Result<(), WorkerFailure>>> = vec![None; bands.len()];
    let slices = split_bands(image.as_bytes_mut(), width, &bands);
    let job = &job;

    pool.scope(|scope| {
        for ((band, pixels), outcome) in bands.iter().zip(slices).zip(outcomes.iter_mut()) {
            scope.spawn(move |_| {
                *outcome = Some(run_worker(band, pixels, config, job));
            });
        }
    });

    let failures: Vec<WorkerFailure> = bands
        .iter()
        .zip(outcomes)
        .filter_map(|(band, outcome)| match outcome {
            Some(Ok(())) => None,
            Some(Err(failure)) => Some(failure),
            None => Some(failure(band, "worker did not report".to_string())),
        })
        .collect();

    if !failures.is_empty() {
        for failure in &failures {
            warn!("Render incomplete: {failure}");
        }
        return Err(RenderError::WorkersFailed(failures));
    }

    info!("Rendered {}x{} in {:?}", width, height, start.elapsed());
    Ok(image)
}

fn run_worker<F>(
    band: &RowBand,
    pixels: &mut [u8],
    config: &RenderConfig,
    job: &F,
) -> Result<(), WorkerFailure>
where
    F: Fn(&RowBand, &mut [u8], &mut StdRng) -> Result<(), String> + Sync,
{
    if band.is_empty() {
        debug!("Worker {} has no rows", band.index);
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed_for_worker(config.seed, band.index));
    let start = Instant::now();

    match panic::catch_unwind(AssertUnwindSafe(|| job(band, pixels, &mut rng))) {
        Ok(Ok(())) => {
            debug!(
                "Worker {} rendered rows {}..{} in {:?}",
                band.index,
                band.start,
                band.end,
                start.elapsed()
            );
            Ok(())
        }
        Ok(Err(reason)) => Err(failure(band, reason)),
        Err(payload) => Err(failure(band, panic_message(payload.as_ref()))),
    }
}

fn failure(band: &RowBand, reason: String) -> WorkerFailure {
    WorkerFailure {
        worker: band.index,
        rows: band.rows(),
        reason,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
