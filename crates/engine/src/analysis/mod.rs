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

//! Interface analysis pipeline.
//!
//! Data flows strictly downward:
//!
//! ```text
//! interface ──► function ──► param ──► classify / example / rules
//!                  └───────► signature ──► classify
//! ```
//!
//! - `classify` - closed classification of ABI type strings
//! - `example` - deterministic example values
//! - `rules` - per-parameter validation rules
//! - `param` - recursive parameter enrichment
//! - `signature` - canonical signatures for selector derivation
//! - `function` - function and event analysis
//! - `interface` - manifest normalization and aggregation

mod classify;
pub use classify::*;

mod example;
pub use example::*;

mod rules;
pub use rules::*;

mod param;
pub use param::*;

mod signature;
pub use signature::*;

mod function;
pub use function::*;

mod interface;
pub use interface::*;
