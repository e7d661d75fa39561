//! Background render worker where the newest request wins
//!
//! Every submission bumps a shared generation counter. The worker drains its
//! queue down to the newest job before rendering, and drops any result whose
//! generation was superseded while it was being rendered, so an interactive
//! caller never sees a stale raster.

use crate::io::error::{CamoError, Result};
use crate::render::synthesis::{SynthesisRequest, synthesize};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use image::RgbImage;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

struct RenderJob {
    generation: u64,
    request: SynthesisRequest,
}

/// Raster produced for one submitted request
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Generation returned by [`RenderWorker::submit`]
    pub generation: u64,
    /// Rendered raster
    pub image: RgbImage,
}

/// Single background thread rendering the most recent request
pub struct RenderWorker {
    job_tx: Option<Sender<RenderJob>>,
    result_rx: Receiver<RenderResult>,
    generation: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl Default for RenderWorker {
    fn default() -> Self {
        Self::spawn()
    }
}

impl RenderWorker {
    /// Start the worker thread
    pub fn spawn() -> Self {
        let (job_tx, job_rx) = unbounded::<RenderJob>();
        let (result_tx, result_rx) = unbounded::<RenderResult>();
        let generation = Arc::new(AtomicU64::new(0));

        let current = Arc::clone(&generation);
        let handle = std::thread::spawn(move || {
            while let Ok(mut job) = job_rx.recv() {
                // Skip straight to the newest queued job
                while let Ok(newer) = job_rx.try_recv() {
                    job = newer;
                }

                if !still_current(&current, job.generation) {
                    trace!(generation = job.generation, "skipping stale render job");
                    continue;
                }

                let image = synthesize(&job.request);

                if !still_current(&current, job.generation) {
                    debug!(generation = job.generation, "discarding stale render");
                    continue;
                }

                let result = RenderResult {
                    generation: job.generation,
                    image,
                };
                if result_tx.send(result).is_err() {
                    break;
                }
            }
        });

        Self {
            job_tx: Some(job_tx),
            result_rx,
            generation,
            handle: Some(handle),
        }
    }

    /// Queue a request, superseding every earlier one
    ///
    /// Returns the generation number the result will carry.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread has stopped
    pub fn submit(&self, request: SynthesisRequest) -> Result<u64> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.job_tx
            .as_ref()
            .ok_or_else(|| worker_stopped("job queue closed"))?
            .send(RenderJob {
                generation,
                request,
            })
            .map_err(|e| worker_stopped(&e.to_string()))?;
        Ok(generation)
    }

    /// Generation of the most recent submission
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Newest current result already available, without blocking
    pub fn try_latest(&self) -> Option<RenderResult> {
        self.result_rx
            .try_iter()
            .filter(|result| result.generation == self.current_generation())
            .last()
    }

    /// Block until the result of the most recent submission arrives
    ///
    /// Stale results received meanwhile are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` elapses or the worker thread has stopped
    pub fn wait_latest(&self, timeout: Duration) -> Result<RenderResult> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.result_rx.recv_timeout(remaining) {
                Ok(result) if result.generation == self.current_generation() => {
                    return Ok(result);
                }
                Ok(_) => {}
                Err(RecvTimeoutError::Timeout) => {
                    return Err(worker_stopped("timed out waiting for render"));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(worker_stopped("render thread exited"));
                }
            }
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        // Closing the queue ends the worker loop
        drop(self.job_tx.take());
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("render thread panicked");
        }
    }
}

fn still_current(generation: &AtomicU64, expected: u64) -> bool {
    generation.load(Ordering::Acquire) == expected
}

fn worker_stopped(reason: &str) -> CamoError {
    CamoError::Worker {
        reason: reason.to_string(),
    }
}
