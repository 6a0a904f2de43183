// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::core::types::{ListingState, SelectionMode};
use crate::core::SelectionModeError;

#[test]
fn test_selection_mode_display() {
    assert_eq!(format!("{}", SelectionMode::Single), "single");
    assert_eq!(format!("{}", SelectionMode::Multiple), "multiple");
}

#[test]
fn test_selection_mode_default() {
    assert_eq!(SelectionMode::default(), SelectionMode::Multiple);
}

#[test]
fn test_selection_mode_parse() {
    assert_eq!("single".parse::<SelectionMode>(), Ok(SelectionMode::Single));
    assert_eq!("BROWSE".parse::<SelectionMode>(), Ok(SelectionMode::Single));
    assert_eq!("multi".parse::<SelectionMode>(), Ok(SelectionMode::Multiple));
    assert_eq!(
        "extended".parse::<SelectionMode>(),
        Err(SelectionModeError("extended".to_string()))
    );
}

#[test]
fn test_listing_state_display() {
    assert_eq!(format!("{}", ListingState::Empty), "empty");
    assert_eq!(format!("{}", ListingState::Scanned), "scanned");
}

#[test]
fn test_selection_mode_error_message() {
    let err = "sideways".parse::<SelectionMode>().unwrap_err();

    assert!(err.to_string().contains("sideways"));
}
