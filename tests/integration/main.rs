//! End-to-end tests for the terminal runtime.
//!
//! Drives a [`parley_runtime::Terminal`] with a scripted editor and the
//! in-process echo service, exercising the full line pipeline: template
//! expansion, dispatch, chat sends, and the transcript.
