// ABIScope - Contract Interface Analyzer
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! ABIScope Engine - interface analysis for smart-contract manifests
//!
//! The engine turns a JSON interface manifest into UI- and execution-ready
//! metadata: canonical signatures, input widgets, validation rules, example
//! values, and read/write/payable classification. Everything here is
//! synchronous and side-effect free; analyses of different manifests can run
//! in parallel without coordination.
//!
//! # Modules
//!
//! - [`analysis`] - type classification, parameter and function analysis, and
//!   the interface orchestrator
//! - [`validation`] - evaluation of validation rules against user input
//! - [`codec`] - conversion between UI strings and execution values
//! - [`config`] - analyzer configuration
//!
//! # Example
//!
//! ```rust
//! let interface = abiscope_engine::analyze_interface(
//!     r#"[{"type":"function","name":"balanceOf","stateMutability":"view",
//!          "inputs":[{"name":"owner","type":"address"}],
//!          "outputs":[{"name":"","type":"uint256"}]}]"#,
//! );
//! assert_eq!(interface.read_count(), 1);
//! ```

pub mod analysis;
pub use analysis::*;

pub mod codec;
pub use codec::*;

pub mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod validation;
pub use validation::*;
