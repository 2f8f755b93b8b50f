// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.

//! Draw the query sequence of a VDJ rearrangement for the terminal, with
//! mutations relative to germline and the conserved codons highlighted.
//!
//! [`reconstruct`] turns a query plus its rearrangement record into
//! [`DisplayToken`]s, and [`adjust`] widens that line when the deletion labels
//! would not fit between V and J.

pub mod classify;
pub mod codon;
pub mod draw;
pub mod errors;
pub mod gap_layout;
pub mod indel;
pub mod reconstruct;
pub mod resolve;
pub mod token;

pub use draw::{draw, Drawing};
pub use errors::ReconstructError;
pub use gap_layout::{adjust, GapLayout};
pub use reconstruct::{reconstruct, reconstruct_record, Reconstruction};
pub use token::{render, DisplayToken, Markers, RenderOpts};
