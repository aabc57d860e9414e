//! Aspect detection and synastry scoring.
//!
//! This crate provides:
//! - The five major aspects with fixed targets and orbs
//! - Pair scanning within one chart (natal aspects) or across two
//!   (synastry), with a smallest-orb tie-break
//! - Category compatibility scores aggregated from an aspect list
//!
//! Both operations are total: any well-formed input produces a result,
//! never an error.

pub mod aspect;
pub mod score;

pub use aspect::{
    ALL_KINDS, Aspect, AspectKind, Nature, Strength, aspects_between, aspects_within, classify,
    separation_deg,
};
pub use score::{CategoryScores, SynastryResult, score_aspects, synastry};
