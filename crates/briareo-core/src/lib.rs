//! Core library for the Briareo stereo hand-gesture dataset: directory
//! indexing, sequence records, and on-demand image loading.

pub mod dataset;
pub mod img;
