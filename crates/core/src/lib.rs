// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! taster-core: Gherkin review and approval library
//!
//! This crate provides the Gherkin parser, validator and house-style lint,
//! the issue tracker and git host port contracts, and the approval,
//! delegation and routing workflows built on them. It performs no I/O of its
//! own; the `memory` module supplies in-process adapters.

pub mod error;
pub mod gherkin;
pub mod memory;
pub mod port;
pub mod workflow;

pub use error::{ApprovalError, PortError, PortResult, WorkflowError};
pub use gherkin::{
    parse, validate_business_rules, validate_gherkin, ParsedFeature, ValidationResult,
};
pub use port::{Author, GitPort, Issue, IssueTrackerPort};
pub use workflow::{
    approve, delegate, route, ApprovalRequest, ApprovalResult, ReviewService, StateChange,
};
