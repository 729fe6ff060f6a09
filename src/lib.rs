//! Resume Matcher - terminal client for a resume/job match analysis service.
//!
//! Uploads a resume and a job description to the service and renders the
//! returned score, insights and skill breakdown.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod file_search;
pub mod fs;
pub mod tui;
