//! `demat-accel`: optional accelerator runtime detection.
//!
//! Probes once at process start for a usable compute adapter and records the
//! result in an [`AccelCapability`] value that callers thread through to
//! whichever component eventually performs backend selection. The probe never
//! fails and never blocks the arithmetic path: when no adapter is usable the
//! capability simply reports the CPU-only state.

pub mod device;

pub use device::{probe, probe_blocking, AccelCapability};
