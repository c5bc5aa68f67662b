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

//! Types shared between the analysis engine and its collaborators.
//!
//! - `manifest` - raw interface-manifest descriptors as deserialized from JSON
//! - `abi` - conversions from `alloy-json-abi` types into raw descriptors
//! - `validation` - framework-neutral validation rules
//! - `analysis` - enriched, UI- and execution-ready analysis results

mod abi;
pub use abi::*;

mod manifest;
pub use manifest::*;

mod validation;
pub use validation::*;

mod analysis;
pub use analysis::*;
